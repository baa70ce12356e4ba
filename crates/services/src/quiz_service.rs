//! Quiz result history and persistence.

use log::debug;
use std::sync::Arc;

use quizfi_core::model::QuizResult;
use quizfi_core::stats::{QuizStats, quiz_stats};
use storage::{ProgressStore, StorageError};

use crate::events::{EventQueue, ProgressEvent};

/// Append-only history of completed quiz attempts.
pub struct QuizService {
    store: Arc<dyn ProgressStore>,
    events: Arc<EventQueue>,
    results: Vec<QuizResult>,
}

impl QuizService {
    #[must_use]
    pub fn new(store: Arc<dyn ProgressStore>, events: Arc<EventQueue>) -> Self {
        let results = store.load_quiz_results();
        Self {
            store,
            events,
            results,
        }
    }

    /// Append a completed attempt to the history.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    pub fn record_result(&mut self, result: QuizResult) -> Result<(), StorageError> {
        debug!(
            "quiz {} completed: {}/{} points",
            result.quiz_id, result.score, result.total_points
        );
        self.events.push(ProgressEvent::QuizCompleted {
            quiz_id: result.quiz_id,
            score: result.score,
            total_points: result.total_points,
            at: result.completed_at,
        });
        self.results.push(result);
        self.store.save_quiz_results(&self.results)
    }

    #[must_use]
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    #[must_use]
    pub fn stats(&self) -> QuizStats {
        quiz_stats(&self.results)
    }

    /// Drop the whole history, in memory and persisted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.results.clear();
        self.store.save_quiz_results(&self.results)
    }
}
