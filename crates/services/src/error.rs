//! Shared error types for the services crate.

use thiserror::Error;

use quizfi_core::model::TipProgressError;
use storage::StorageError;

/// Errors emitted by `PuzzleService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("unknown puzzle")]
    UnknownPuzzle,
    #[error("puzzle has not been started")]
    NotStarted,
    #[error("answer is empty")]
    EmptyAnswer,
    #[error("puzzle already completed")]
    AlreadyCompleted,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("question already answered; advance first")]
    AlreadyAnswered,
    #[error("answer the current question before advancing")]
    NotYetAnswered,
    #[error("option index {index} out of range for {options} options")]
    InvalidOption { index: usize, options: usize },
    #[error("quiz already completed")]
    Completed,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `TipService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TipError {
    #[error("unknown tip")]
    UnknownTip,
    #[error(transparent)]
    Progress(#[from] TipProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
