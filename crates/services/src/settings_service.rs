//! Preferences, the combined stats roll-up, data export, and factory reset.

use log::debug;
use serde::Serialize;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use quizfi_core::Clock;
use quizfi_core::model::UserPreferences;
use quizfi_core::stats::{PuzzleStats, QuizStats, TipStats, UserStats};
use storage::ProgressStore;

use crate::error::SettingsError;
use crate::events::{EventQueue, ProgressEvent};

/// Everything the store holds, gathered into one export document.
#[derive(Serialize)]
struct ExportDocument {
    exported_at: DateTime<Utc>,
    preferences: UserPreferences,
    completed_quizzes: Vec<quizfi_core::model::QuizResult>,
    puzzle_progress: Vec<quizfi_core::model::PuzzleProgress>,
    completed_puzzles: Vec<quizfi_core::model::PuzzleResult>,
    tip_progress: Vec<quizfi_core::model::TipProgress>,
    bookmarked_tips: Vec<quizfi_core::model::TipId>,
}

/// Owns the preference snapshot and the whole-account operations that cut
/// across the other services.
pub struct SettingsService {
    store: Arc<dyn ProgressStore>,
    events: Arc<EventQueue>,
    clock: Clock,
    preferences: UserPreferences,
}

impl SettingsService {
    #[must_use]
    pub fn new(store: Arc<dyn ProgressStore>, events: Arc<EventQueue>, clock: Clock) -> Self {
        let preferences = store.load_preferences();
        Self {
            store,
            events,
            clock,
            preferences,
        }
    }

    #[must_use]
    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Apply an edit to the preferences and persist the result.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Storage` if the snapshot cannot be written.
    pub fn update_preferences(
        &mut self,
        edit: impl FnOnce(&mut UserPreferences),
    ) -> Result<(), SettingsError> {
        edit(&mut self.preferences);
        self.store.save_preferences(&self.preferences)?;
        self.events.push(ProgressEvent::PreferencesChanged);
        Ok(())
    }

    /// Combine the per-service stats into the overall roll-up.
    #[must_use]
    pub fn user_stats(quizzes: QuizStats, puzzles: PuzzleStats, tips: TipStats) -> UserStats {
        UserStats {
            quizzes,
            puzzles,
            tips,
        }
    }

    /// Serialize every persisted collection into one pretty-printed JSON
    /// document, for the user to take with them.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Export` if serialization fails.
    pub fn export_json(&self) -> Result<String, SettingsError> {
        let mut puzzle_progress: Vec<_> =
            self.store.load_puzzle_progress().into_values().collect();
        puzzle_progress.sort_by_key(|p| p.started_at);
        let mut tip_progress: Vec<_> = self.store.load_tip_progress().into_values().collect();
        tip_progress.sort_by_key(|p| p.tip_id.value());

        let document = ExportDocument {
            exported_at: self.clock.now(),
            preferences: self.preferences.clone(),
            completed_quizzes: self.store.load_quiz_results(),
            puzzle_progress,
            completed_puzzles: self.store.load_puzzle_results(),
            tip_progress,
            bookmarked_tips: self.store.load_bookmarks().into_iter().collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Wipe every persisted snapshot and return preferences to factory
    /// state. Other services must be cleared alongside this call; the
    /// store-level wipe does not reach their in-memory copies.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Storage` if the wipe fails.
    pub fn reset_all(&mut self) -> Result<(), SettingsError> {
        debug!("resetting all persisted data");
        self.store.clear_all()?;
        self.preferences = UserPreferences::default();
        self.events.push(ProgressEvent::DataReset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizfi_core::model::Difficulty;
    use quizfi_core::time::fixed_clock;
    use storage::MemoryStore;

    fn service_on(store: Arc<MemoryStore>) -> SettingsService {
        SettingsService::new(store, Arc::new(EventQueue::new()), fixed_clock())
    }

    #[test]
    fn updates_persist_across_a_restart() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut service = service_on(Arc::clone(&store));
            service
                .update_preferences(|prefs| {
                    prefs.dark_mode_enabled = false;
                    prefs.preferred_difficulty = Difficulty::Advanced;
                })
                .unwrap();
        }

        let service = service_on(store);
        assert!(!service.preferences().dark_mode_enabled);
        assert_eq!(
            service.preferences().preferred_difficulty,
            Difficulty::Advanced
        );
    }

    #[test]
    fn export_is_valid_json_with_every_section() {
        let service = service_on(Arc::new(MemoryStore::new()));
        let json = service.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for section in [
            "exported_at",
            "preferences",
            "completed_quizzes",
            "puzzle_progress",
            "completed_puzzles",
            "tip_progress",
            "bookmarked_tips",
        ] {
            assert!(value.get(section).is_some(), "missing section {section}");
        }
    }

    #[test]
    fn reset_restores_factory_preferences_and_empties_the_store() {
        let store = Arc::new(MemoryStore::new());
        let mut service = service_on(Arc::clone(&store));
        service
            .update_preferences(|prefs| prefs.notifications_enabled = false)
            .unwrap();

        service.reset_all().unwrap();
        assert_eq!(*service.preferences(), UserPreferences::default());
        assert_eq!(store.load_preferences(), UserPreferences::default());
        assert!(store.load_quiz_results().is_empty());
    }
}
