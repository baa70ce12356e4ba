//! State-change notifications, decoupled from the pure scoring functions.
//!
//! Services push an event for every mutation; the UI layer polls and drains
//! the queue on its own schedule. Nothing here calls back into subscribers,
//! so event emission can never re-enter a service mid-mutation.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

use quizfi_core::model::{PuzzleId, QuizId, TipId};

/// Every user-visible state change in the system produces one event.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    QuizCompleted {
        quiz_id: QuizId,
        score: u32,
        total_points: u32,
        at: DateTime<Utc>,
    },
    PuzzleStarted {
        puzzle_id: PuzzleId,
        at: DateTime<Utc>,
    },
    HintTaken {
        puzzle_id: PuzzleId,
        hints_used: u32,
    },
    AnswerRejected {
        puzzle_id: PuzzleId,
        attempts: u32,
    },
    PuzzleSolved {
        puzzle_id: PuzzleId,
        score: u32,
        at: DateTime<Utc>,
    },
    PuzzleReset {
        puzzle_id: PuzzleId,
    },
    TipRead {
        tip_id: TipId,
        at: DateTime<Utc>,
    },
    BookmarkToggled {
        tip_id: TipId,
        bookmarked: bool,
    },
    ActionItemToggled {
        tip_id: TipId,
        index: usize,
        completed: bool,
    },
    PreferencesChanged,
    DataReset,
}

/// FIFO queue of pending events, drained by the presentation layer.
#[derive(Default)]
pub struct EventQueue {
    pending: Mutex<VecDeque<ProgressEvent>>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: ProgressEvent) {
        self.lock().push_back(event);
    }

    /// Take every pending event, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<ProgressEvent> {
        self.lock().drain(..).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<ProgressEvent>> {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
