//! One-time wiring of the service graph over a shared store and clock.

use std::sync::Arc;

use quizfi_core::Clock;
use quizfi_core::stats::UserStats;
use storage::{ProgressStore, StorageError};
use thiserror::Error;

use crate::catalog::{CatalogError, ContentCatalog};
use crate::error::{PuzzleError, SettingsError, TipError};
use crate::events::EventQueue;
use crate::puzzle_service::PuzzleService;
use crate::quiz_service::QuizService;
use crate::settings_service::SettingsService;
use crate::tip_service::TipService;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Tip(#[from] TipError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The full service graph, built once at startup.
///
/// Every service shares the same store, event queue, and clock, so a single
/// [`AppServices::drain_events`] sees all mutations and a single
/// [`AppServices::reset_all`] reaches every collection.
pub struct AppServices {
    catalog: Arc<ContentCatalog>,
    events: Arc<EventQueue>,
    pub quizzes: QuizService,
    pub puzzles: PuzzleService,
    pub tips: TipService,
    pub settings: SettingsService,
}

impl AppServices {
    /// Wire the services over `store` with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the built-in content fails
    /// validation.
    pub fn new(store: Arc<dyn ProgressStore>, clock: Clock) -> Result<Self, AppServicesError> {
        Self::with_catalog(ContentCatalog::builtin()?, store, clock)
    }

    /// Wire the services over `store` with a caller-supplied catalog.
    pub fn with_catalog(
        catalog: ContentCatalog,
        store: Arc<dyn ProgressStore>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(catalog);
        let events = Arc::new(EventQueue::new());
        Ok(Self {
            quizzes: QuizService::new(Arc::clone(&store), Arc::clone(&events)),
            puzzles: PuzzleService::new(
                Arc::clone(&catalog),
                Arc::clone(&store),
                Arc::clone(&events),
                clock,
            ),
            tips: TipService::new(
                Arc::clone(&catalog),
                Arc::clone(&store),
                Arc::clone(&events),
                clock,
            ),
            settings: SettingsService::new(Arc::clone(&store), Arc::clone(&events), clock),
            catalog,
            events,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Take every pending event, oldest first.
    #[must_use]
    pub fn drain_events(&self) -> Vec<crate::events::ProgressEvent> {
        self.events.drain()
    }

    /// The combined roll-up across every activity type.
    #[must_use]
    pub fn user_stats(&self) -> UserStats {
        SettingsService::user_stats(
            self.quizzes.stats(),
            self.puzzles.stats(),
            self.tips.stats(),
        )
    }

    /// Wipe everything: every service's state, every persisted snapshot,
    /// and the preferences.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure encountered; a partial reset is
    /// possible in that case.
    pub fn reset_all(&mut self) -> Result<(), AppServicesError> {
        self.quizzes.clear()?;
        self.puzzles.clear()?;
        self.tips.clear()?;
        self.settings.reset_all()?;
        Ok(())
    }
}
