#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod events;
pub mod puzzle_service;
pub mod quiz_service;
pub mod quiz_session;
pub mod settings_service;
pub mod ticker;
pub mod tip_service;

pub use quizfi_core::Clock;

pub use app_services::{AppServices, AppServicesError};
pub use catalog::{CatalogError, ContentCatalog};
pub use error::{PuzzleError, QuizSessionError, SettingsError, TipError};
pub use events::{EventQueue, ProgressEvent};
pub use puzzle_service::{PuzzleService, SubmitOutcome};
pub use quiz_service::QuizService;
pub use quiz_session::{AnswerFeedback, QuizSession};
pub use settings_service::SettingsService;
pub use ticker::SessionTicker;
pub use tip_service::TipService;
