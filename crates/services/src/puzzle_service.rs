//! Puzzle sessions: hints, free-text answer submission, scoring.

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use quizfi_core::model::{PuzzleId, PuzzleProgress, PuzzleResult};
use quizfi_core::stats::{PuzzleStats, puzzle_stats};
use quizfi_core::{Clock, MatchPolicy, compute_score};
use storage::ProgressStore;

use crate::catalog::ContentCatalog;
use crate::error::PuzzleError;
use crate::events::{EventQueue, ProgressEvent};

/// What a submission did: whether it was accepted, and the final score when
/// it completed the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub correct: bool,
    pub attempts: u32,
    pub score: Option<u32>,
}

/// Tracks per-puzzle live progress and the completed-result history.
///
/// One live `PuzzleProgress` per puzzle; every mutation is persisted as a
/// whole snapshot before returning.
pub struct PuzzleService {
    catalog: Arc<ContentCatalog>,
    store: Arc<dyn ProgressStore>,
    events: Arc<EventQueue>,
    clock: Clock,
    policy: MatchPolicy,
    progress: HashMap<PuzzleId, PuzzleProgress>,
    completed: Vec<PuzzleResult>,
}

impl PuzzleService {
    #[must_use]
    pub fn new(
        catalog: Arc<ContentCatalog>,
        store: Arc<dyn ProgressStore>,
        events: Arc<EventQueue>,
        clock: Clock,
    ) -> Self {
        let progress = store.load_puzzle_progress();
        let completed = store.load_puzzle_results();
        Self {
            catalog,
            store,
            events,
            clock,
            policy: MatchPolicy::default(),
            progress,
            completed,
        }
    }

    /// Replace the answer-matching policy, e.g. for tuning experiments.
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Begin (or restart) a puzzle session with a fresh progress record.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::UnknownPuzzle` if the id is not in the catalog,
    /// or `PuzzleError::Storage` if the snapshot cannot be written.
    pub fn start(&mut self, puzzle_id: PuzzleId) -> Result<PuzzleProgress, PuzzleError> {
        if self.catalog.puzzle(puzzle_id).is_none() {
            return Err(PuzzleError::UnknownPuzzle);
        }
        let now = self.clock.now();
        let record = PuzzleProgress::started(puzzle_id, now);
        self.progress.insert(puzzle_id, record.clone());
        self.store.save_puzzle_progress(&self.progress)?;
        self.events.push(ProgressEvent::PuzzleStarted { puzzle_id, at: now });

        Ok(record)
    }

    /// Take the next hint, increasing the hint deduction.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::NotStarted` if there is no live session, or
    /// `PuzzleError::AlreadyCompleted` once the puzzle is solved.
    pub fn use_hint(&mut self, puzzle_id: PuzzleId) -> Result<u32, PuzzleError> {
        let progress = self
            .progress
            .get_mut(&puzzle_id)
            .ok_or(PuzzleError::NotStarted)?;
        if progress.is_completed {
            return Err(PuzzleError::AlreadyCompleted);
        }
        progress.hints_used += 1;
        let hints_used = progress.hints_used;
        self.store.save_puzzle_progress(&self.progress)?;
        self.events.push(ProgressEvent::HintTaken { puzzle_id, hints_used });

        Ok(hints_used)
    }

    /// Submit a free-text answer.
    ///
    /// Every accepted submission increments the attempt count. A correct
    /// answer completes the puzzle: the score is computed with the attempt
    /// count as of this submission (a first-try solve carries no attempt
    /// penalty) and an immutable [`PuzzleResult`] is appended to history.
    ///
    /// # Errors
    ///
    /// - `PuzzleError::EmptyAnswer` for blank text; nothing is recorded.
    /// - `PuzzleError::NotStarted` if there is no live session.
    /// - `PuzzleError::AlreadyCompleted` on resubmission after success.
    /// - `PuzzleError::Storage` if a snapshot cannot be written.
    pub fn submit_answer(
        &mut self,
        puzzle_id: PuzzleId,
        answer: &str,
    ) -> Result<SubmitOutcome, PuzzleError> {
        if answer.trim().is_empty() {
            return Err(PuzzleError::EmptyAnswer);
        }
        let puzzle = self
            .catalog
            .puzzle(puzzle_id)
            .ok_or(PuzzleError::UnknownPuzzle)?;
        let progress = self
            .progress
            .get_mut(&puzzle_id)
            .ok_or(PuzzleError::NotStarted)?;
        if progress.is_completed {
            return Err(PuzzleError::AlreadyCompleted);
        }

        progress.attempts += 1;
        let attempts = progress.attempts;
        let correct = self.policy.matches(answer, puzzle.correct_answer());

        let score = if correct {
            let now = self.clock.now();
            let completion_secs = (now - progress.started_at).num_seconds();
            let score = compute_score(puzzle.points(), progress.hints_used, attempts);

            progress.is_completed = true;
            progress.completion_secs = Some(completion_secs);
            progress.completed_at = Some(now);
            progress.score = score;

            self.completed.push(PuzzleResult {
                puzzle: puzzle.clone(),
                hints_used: progress.hints_used,
                attempts,
                completion_secs,
                score,
                completed_at: now,
            });
            self.store.save_puzzle_results(&self.completed)?;
            debug!("puzzle {puzzle_id} solved: score {score}, {attempts} attempts");
            self.events.push(ProgressEvent::PuzzleSolved { puzzle_id, score, at: now });
            Some(score)
        } else {
            self.events.push(ProgressEvent::AnswerRejected { puzzle_id, attempts });
            None
        };

        self.store.save_puzzle_progress(&self.progress)?;

        Ok(SubmitOutcome { correct, attempts, score })
    }

    /// Discard the live session for a puzzle, returning it to not-started.
    ///
    /// The completed-result history is untouched; only the in-memory record
    /// is dropped.
    pub fn reset(&mut self, puzzle_id: PuzzleId) {
        if self.progress.remove(&puzzle_id).is_some() {
            self.events.push(ProgressEvent::PuzzleReset { puzzle_id });
        }
    }

    #[must_use]
    pub fn progress_for(&self, puzzle_id: PuzzleId) -> Option<&PuzzleProgress> {
        self.progress.get(&puzzle_id)
    }

    #[must_use]
    pub fn completed(&self) -> &[PuzzleResult] {
        &self.completed
    }

    #[must_use]
    pub fn stats(&self) -> PuzzleStats {
        puzzle_stats(&self.completed)
    }

    /// Drop all puzzle progress and history, both in memory and persisted.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::Storage` if a snapshot cannot be written.
    pub fn clear(&mut self) -> Result<(), PuzzleError> {
        self.progress.clear();
        self.completed.clear();
        self.store.save_puzzle_progress(&self.progress)?;
        self.store.save_puzzle_results(&self.completed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quizfi_core::time::fixed_clock;
    use storage::MemoryStore;

    fn service() -> PuzzleService {
        let catalog = Arc::new(ContentCatalog::builtin().unwrap());
        PuzzleService::new(
            catalog,
            Arc::new(MemoryStore::new()),
            Arc::new(EventQueue::new()),
            fixed_clock(),
        )
    }

    fn debt_puzzle_id(service: &PuzzleService) -> PuzzleId {
        service
            .catalog
            .puzzles()
            .iter()
            .find(|p| p.title() == "The Debt Elimination Strategy")
            .map(|p| p.id())
            .unwrap()
    }

    #[test]
    fn submitting_before_start_is_rejected() {
        let mut service = service();
        let id = debt_puzzle_id(&service);
        assert!(matches!(
            service.submit_answer(id, "debt avalanche"),
            Err(PuzzleError::NotStarted)
        ));
    }

    #[test]
    fn blank_answer_is_rejected_without_an_attempt() {
        let mut service = service();
        let id = debt_puzzle_id(&service);
        service.start(id).unwrap();

        assert!(matches!(
            service.submit_answer(id, "   "),
            Err(PuzzleError::EmptyAnswer)
        ));
        assert_eq!(service.progress_for(id).unwrap().attempts, 0);
    }

    #[test]
    fn first_try_solve_keeps_full_points() {
        let mut service = service();
        let id = debt_puzzle_id(&service);
        service.start(id).unwrap();

        let outcome = service
            .submit_answer(id, "pay the avalanche way: extra toward the highest interest rate debt")
            .unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.score, Some(60));

        let result = &service.completed()[0];
        assert_eq!(result.attempts, 1);
        assert!((result.efficiency() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_answers_accumulate_attempt_penalties() {
        let mut service = service();
        let id = debt_puzzle_id(&service);
        service.start(id).unwrap();
        service.use_hint(id).unwrap();
        service.use_hint(id).unwrap();

        assert!(!service.submit_answer(id, "just pay whatever").unwrap().correct);
        assert!(!service.submit_answer(id, "ignore the bills").unwrap().correct);
        let outcome = service
            .submit_answer(id, "avalanche: extra payment toward the highest interest rate debt")
            .unwrap();

        // 60 base - 10*2 hints - 5*2 failed attempts = 30
        assert!(outcome.correct);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.score, Some(30));
        assert_eq!(service.progress_for(id).unwrap().score, 30);
    }

    #[test]
    fn resubmission_after_completion_is_rejected() {
        let mut service = service();
        let id = debt_puzzle_id(&service);
        service.start(id).unwrap();
        service
            .submit_answer(id, "debt avalanche toward highest interest rate")
            .unwrap();

        assert!(matches!(
            service.submit_answer(id, "debt avalanche toward highest interest rate"),
            Err(PuzzleError::AlreadyCompleted)
        ));
        assert_eq!(service.completed().len(), 1);
    }

    #[test]
    fn completion_time_comes_from_the_clock() {
        let catalog = Arc::new(ContentCatalog::builtin().unwrap());
        let mut clock = fixed_clock();
        let start = clock.now();
        let mut service = PuzzleService::new(
            catalog,
            Arc::new(MemoryStore::new()),
            Arc::new(EventQueue::new()),
            clock,
        );
        let id = debt_puzzle_id(&service);
        service.start(id).unwrap();

        clock.advance(Duration::seconds(42));
        service.clock = clock;
        service
            .submit_answer(id, "debt avalanche toward highest interest rate")
            .unwrap();

        let result = &service.completed()[0];
        assert_eq!(result.completion_secs, 42);
        assert_eq!(result.completed_at, start + Duration::seconds(42));
    }

    #[test]
    fn reset_returns_to_not_started_but_keeps_history() {
        let mut service = service();
        let id = debt_puzzle_id(&service);
        service.start(id).unwrap();
        service
            .submit_answer(id, "debt avalanche toward highest interest rate")
            .unwrap();

        service.reset(id);
        assert!(service.progress_for(id).is_none());
        assert_eq!(service.completed().len(), 1);
    }

    #[test]
    fn progress_survives_a_service_restart() {
        let catalog = Arc::new(ContentCatalog::builtin().unwrap());
        let store = Arc::new(MemoryStore::new());
        let events = Arc::new(EventQueue::new());

        let id;
        {
            let mut service = PuzzleService::new(
                Arc::clone(&catalog),
                Arc::clone(&store) as Arc<dyn ProgressStore>,
                Arc::clone(&events),
                fixed_clock(),
            );
            id = debt_puzzle_id(&service);
            service.start(id).unwrap();
            service.use_hint(id).unwrap();
        }

        let service = PuzzleService::new(catalog, store, events, fixed_clock());
        assert_eq!(service.progress_for(id).unwrap().hints_used, 1);
    }
}
