//! An in-memory quiz run: one question at a time, explanation after each
//! answer, no backward navigation.

use quizfi_core::Clock;
use quizfi_core::model::{Quiz, QuizQuestion, QuizResult};

use crate::error::QuizSessionError;
use crate::ticker::SessionTicker;

/// Where the session currently sits.
///
/// `Answering(i) -> ShowingExplanation(i) -> Answering(i+1) | Completed`;
/// transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Answering,
    ShowingExplanation { selected: usize },
    Completed,
}

/// Feedback for one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer_index: usize,
    pub points_awarded: u32,
    pub explanation: String,
}

/// A single run through one quiz.
///
/// Owns its elapsed-time ticker; the ticker stops when the session
/// completes or is abandoned, never after.
pub struct QuizSession {
    quiz: Quiz,
    current_index: usize,
    phase: Phase,
    score: u32,
    correct_answers: u32,
    ticker: SessionTicker,
    clock: Clock,
}

impl QuizSession {
    /// Start a session on `quiz`, with the clock ticking immediately.
    #[must_use]
    pub fn start(quiz: Quiz, clock: Clock) -> Self {
        let mut ticker = SessionTicker::new(clock);
        ticker.start();
        Self {
            quiz,
            current_index: 0,
            phase: Phase::Answering,
            score: 0,
            correct_answers: 0,
            ticker,
            clock,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// The question awaiting an answer or showing its explanation, `None`
    /// once completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.phase == Phase::Completed {
            return None;
        }
        self.quiz.questions().get(self.current_index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.quiz.questions().len()
    }

    /// Fraction of questions answered so far, for the progress bar.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.quiz.questions().len();
        let answered = match self.phase {
            Phase::Answering => self.current_index,
            Phase::ShowingExplanation { .. } => self.current_index + 1,
            Phase::Completed => total,
        };
        answered as f64 / total as f64
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The option picked for the current question, while its explanation is
    /// on screen.
    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        match self.phase {
            Phase::ShowingExplanation { selected } => Some(selected),
            Phase::Answering | Phase::Completed => None,
        }
    }

    /// Refresh and return the running elapsed seconds. Call roughly once
    /// per second while the session is on screen.
    pub fn tick(&mut self) -> i64 {
        self.ticker.tick()
    }

    /// Answer the current question.
    ///
    /// Scoring happens here; the session then shows the explanation until
    /// [`QuizSession::advance`] is called.
    ///
    /// # Errors
    ///
    /// - `QuizSessionError::Completed` after the last question.
    /// - `QuizSessionError::AlreadyAnswered` while the explanation is up.
    /// - `QuizSessionError::InvalidOption` for an out-of-range index.
    pub fn select_answer(&mut self, index: usize) -> Result<AnswerFeedback, QuizSessionError> {
        match self.phase {
            Phase::Completed => return Err(QuizSessionError::Completed),
            Phase::ShowingExplanation { .. } => return Err(QuizSessionError::AlreadyAnswered),
            Phase::Answering => {}
        }
        let question = &self.quiz.questions()[self.current_index];
        if index >= question.options.len() {
            return Err(QuizSessionError::InvalidOption {
                index,
                options: question.options.len(),
            });
        }

        let correct = question.is_correct(index);
        let points_awarded = if correct { question.points } else { 0 };
        if correct {
            self.score += question.points;
            self.correct_answers += 1;
        }
        self.phase = Phase::ShowingExplanation { selected: index };

        Ok(AnswerFeedback {
            correct,
            correct_answer_index: question.correct_answer_index,
            points_awarded,
            explanation: question.explanation.clone(),
        })
    }

    /// Move past the explanation: on to the next question, or completion.
    ///
    /// Completing stops the ticker and returns the immutable result for the
    /// caller to record.
    ///
    /// # Errors
    ///
    /// - `QuizSessionError::Completed` if already finished.
    /// - `QuizSessionError::NotYetAnswered` if the current question has no
    ///   answer yet.
    pub fn advance(&mut self) -> Result<Option<QuizResult>, QuizSessionError> {
        match self.phase {
            Phase::Completed => return Err(QuizSessionError::Completed),
            Phase::Answering => return Err(QuizSessionError::NotYetAnswered),
            Phase::ShowingExplanation { .. } => {}
        }

        if self.is_last_question() {
            self.phase = Phase::Completed;
            let completion_secs = self.ticker.stop();
            #[allow(clippy::cast_possible_truncation)]
            let total_questions = self.quiz.questions().len() as u32;
            return Ok(Some(QuizResult {
                quiz_id: self.quiz.id(),
                quiz_title: self.quiz.title().to_owned(),
                score: self.score,
                total_points: self.quiz.total_points(),
                completion_secs,
                correct_answers: self.correct_answers,
                total_questions,
                completed_at: self.clock.now(),
            }));
        }

        self.current_index += 1;
        self.phase = Phase::Answering;
        Ok(None)
    }

    /// Abandon the run. Stops the ticker; nothing is recorded.
    pub fn abandon(&mut self) {
        self.ticker.stop();
        self.phase = Phase::Completed;
    }
}
