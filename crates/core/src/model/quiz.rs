use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating quiz content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizValidationError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("question {index} has fewer than two options")]
    TooFewOptions { index: usize },

    #[error("question {index} marks option {answer} correct but only has {options} options")]
    CorrectAnswerOutOfBounds {
        index: usize,
        answer: usize,
        options: usize,
    },

    #[error("question {index} has a non-positive point value")]
    NonPositivePoints { index: usize },
}

//
// ─── CATEGORIES AND DIFFICULTY ────────────────────────────────────────────────
//

/// Topic bucket for a quiz.
///
/// Closed set, persisted as its display label. Unrecognized persisted
/// values decode as `GeneralFinance` rather than failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuizCategory {
    Budgeting,
    Investing,
    Savings,
    CreditDebt,
    Insurance,
    Taxes,
    GeneralFinance,
    Entertainment,
}

impl QuizCategory {
    /// Human-readable label, also the persisted representation.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            QuizCategory::Budgeting => "Budgeting",
            QuizCategory::Investing => "Investing",
            QuizCategory::Savings => "Savings",
            QuizCategory::CreditDebt => "Credit & Debt",
            QuizCategory::Insurance => "Insurance",
            QuizCategory::Taxes => "Taxes",
            QuizCategory::GeneralFinance => "General Finance",
            QuizCategory::Entertainment => "Entertainment",
        }
    }

    /// All categories, in display order.
    pub const ALL: [QuizCategory; 8] = [
        QuizCategory::Budgeting,
        QuizCategory::Investing,
        QuizCategory::Savings,
        QuizCategory::CreditDebt,
        QuizCategory::Insurance,
        QuizCategory::Taxes,
        QuizCategory::GeneralFinance,
        QuizCategory::Entertainment,
    ];
}

impl From<String> for QuizCategory {
    fn from(label: String) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .unwrap_or(QuizCategory::GeneralFinance)
    }
}

impl From<QuizCategory> for String {
    fn from(category: QuizCategory) -> Self {
        category.label().to_owned()
    }
}

/// Quiz and tip difficulty tiers. Unknown persisted values decode as
/// `Beginner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Intermediate" => Difficulty::Intermediate,
            "Advanced" => Difficulty::Advanced,
            _ => Difficulty::Beginner,
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.label().to_owned()
    }
}

//
// ─── QUIZ ─────────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
    pub points: u32,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
        explanation: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            id: QuestionId::new(),
            prompt: prompt.into(),
            options,
            correct_answer_index,
            explanation: explanation.into(),
            points,
        }
    }

    /// Returns true if `index` picks the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer_index
    }
}

/// A quiz: an ordered list of questions under one category and difficulty.
///
/// Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    id: QuizId,
    title: String,
    category: QuizCategory,
    questions: Vec<QuizQuestion>,
    difficulty: Difficulty,
    estimated_minutes: u32,
}

impl Quiz {
    /// Validate and build a quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizValidationError` if the question list is empty, any
    /// question has fewer than two options, marks an out-of-bounds option
    /// correct, or carries zero points.
    pub fn new(
        title: impl Into<String>,
        category: QuizCategory,
        questions: Vec<QuizQuestion>,
        difficulty: Difficulty,
        estimated_minutes: u32,
    ) -> Result<Self, QuizValidationError> {
        if questions.is_empty() {
            return Err(QuizValidationError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(QuizValidationError::TooFewOptions { index });
            }
            if question.correct_answer_index >= question.options.len() {
                return Err(QuizValidationError::CorrectAnswerOutOfBounds {
                    index,
                    answer: question.correct_answer_index,
                    options: question.options.len(),
                });
            }
            if question.points == 0 {
                return Err(QuizValidationError::NonPositivePoints { index });
            }
        }

        Ok(Self {
            id: QuizId::new(),
            title: title.into(),
            category,
            questions,
            difficulty,
            estimated_minutes,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> QuizCategory {
        self.category
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// Sum of all question point values.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

//
// ─── QUIZ RESULT ──────────────────────────────────────────────────────────────
//

/// Immutable record of one completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub score: u32,
    pub total_points: u32,
    /// Wall-clock seconds from start to completion.
    pub completion_secs: i64,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    /// Score as a percentage of the total available points.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total_points == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total_points) * 100.0
    }

    /// Letter grade from fixed percentage breakpoints.
    #[must_use]
    pub fn grade(&self) -> &'static str {
        let pct = self.percentage();
        if pct >= 90.0 {
            "A+"
        } else if pct >= 80.0 {
            "A"
        } else if pct >= 70.0 {
            "B"
        } else if pct >= 60.0 {
            "C"
        } else if pct >= 50.0 {
            "D"
        } else {
            "F"
        }
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
