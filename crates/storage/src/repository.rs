//! Key-value persistence for progress snapshots.
//!
//! Each collection is stored whole under one key: saves overwrite the full
//! snapshot, loads read it back. There are no partial updates and no
//! transactions. A snapshot that is missing or fails to decode loads as the
//! empty collection; corrupt state is never surfaced to the caller.

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;
use thiserror::Error;

use quizfi_core::model::{
    PuzzleId, PuzzleProgress, PuzzleResult, QuizResult, TipId, TipProgress, UserPreferences,
};

/// Errors surfaced by snapshot stores.
///
/// Only writes fail; reads recover decode problems as empty state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The fixed set of persistence keys, one per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    QuizResults,
    PuzzleProgress,
    PuzzleResults,
    TipProgress,
    BookmarkedTips,
    Preferences,
}

impl StoreKey {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::QuizResults => "completed_quizzes",
            StoreKey::PuzzleProgress => "puzzle_progress",
            StoreKey::PuzzleResults => "completed_puzzles",
            StoreKey::TipProgress => "tip_progress",
            StoreKey::BookmarkedTips => "bookmarked_tips",
            StoreKey::Preferences => "preferences",
        }
    }

    pub const ALL: [StoreKey; 6] = [
        StoreKey::QuizResults,
        StoreKey::PuzzleProgress,
        StoreKey::PuzzleResults,
        StoreKey::TipProgress,
        StoreKey::BookmarkedTips,
        StoreKey::Preferences,
    ];
}

/// Raw byte-level snapshot access. Implementations provide the medium;
/// the typed [`ProgressStore`] API is layered on top for every
/// `SnapshotStore`.
pub trait SnapshotStore: Send + Sync {
    /// Read the raw snapshot under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the medium cannot be read.
    fn read_raw(&self, key: StoreKey) -> Result<Option<Vec<u8>>, StorageError>;

    /// Overwrite the snapshot under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the medium cannot be written.
    fn write_raw(&self, key: StoreKey, bytes: &[u8]) -> Result<(), StorageError>;

    /// Remove the snapshot under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the medium cannot be written.
    fn remove_raw(&self, key: StoreKey) -> Result<(), StorageError>;
}

/// Typed persistence contract used by the services layer.
pub trait ProgressStore: Send + Sync {
    fn load_quiz_results(&self) -> Vec<QuizResult>;
    /// # Errors
    /// Returns `StorageError` if the snapshot cannot be written.
    fn save_quiz_results(&self, results: &[QuizResult]) -> Result<(), StorageError>;

    fn load_puzzle_progress(&self) -> HashMap<PuzzleId, PuzzleProgress>;
    /// # Errors
    /// Returns `StorageError` if the snapshot cannot be written.
    fn save_puzzle_progress(
        &self,
        progress: &HashMap<PuzzleId, PuzzleProgress>,
    ) -> Result<(), StorageError>;

    fn load_puzzle_results(&self) -> Vec<PuzzleResult>;
    /// # Errors
    /// Returns `StorageError` if the snapshot cannot be written.
    fn save_puzzle_results(&self, results: &[PuzzleResult]) -> Result<(), StorageError>;

    fn load_tip_progress(&self) -> HashMap<TipId, TipProgress>;
    /// # Errors
    /// Returns `StorageError` if the snapshot cannot be written.
    fn save_tip_progress(
        &self,
        progress: &HashMap<TipId, TipProgress>,
    ) -> Result<(), StorageError>;

    fn load_bookmarks(&self) -> BTreeSet<TipId>;
    /// # Errors
    /// Returns `StorageError` if the snapshot cannot be written.
    fn save_bookmarks(&self, bookmarks: &BTreeSet<TipId>) -> Result<(), StorageError>;

    fn load_preferences(&self) -> UserPreferences;
    /// # Errors
    /// Returns `StorageError` if the snapshot cannot be written.
    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError>;

    /// Remove every persisted collection. Preference defaults are the
    /// caller's concern.
    ///
    /// # Errors
    /// Returns `StorageError` if any key cannot be removed.
    fn clear_all(&self) -> Result<(), StorageError>;
}

fn load_or_default<S, T>(store: &S, key: StoreKey) -> T
where
    S: SnapshotStore + ?Sized,
    T: DeserializeOwned + Default,
{
    let bytes = match store.read_raw(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return T::default(),
        Err(err) => {
            warn!("failed to read snapshot {}: {err}; starting fresh", key.as_str());
            return T::default();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => {
            warn!("corrupt snapshot {}: {err}; starting fresh", key.as_str());
            T::default()
        }
    }
}

fn save<S, T>(store: &S, key: StoreKey, value: &T) -> Result<(), StorageError>
where
    S: SnapshotStore + ?Sized,
    T: Serialize,
{
    let bytes = serde_json::to_vec(value)?;
    store.write_raw(key, &bytes)
}

impl<S: SnapshotStore> ProgressStore for S {
    fn load_quiz_results(&self) -> Vec<QuizResult> {
        load_or_default(self, StoreKey::QuizResults)
    }

    fn save_quiz_results(&self, results: &[QuizResult]) -> Result<(), StorageError> {
        save(self, StoreKey::QuizResults, &results)
    }

    fn load_puzzle_progress(&self) -> HashMap<PuzzleId, PuzzleProgress> {
        load_or_default(self, StoreKey::PuzzleProgress)
    }

    fn save_puzzle_progress(
        &self,
        progress: &HashMap<PuzzleId, PuzzleProgress>,
    ) -> Result<(), StorageError> {
        save(self, StoreKey::PuzzleProgress, progress)
    }

    fn load_puzzle_results(&self) -> Vec<PuzzleResult> {
        load_or_default(self, StoreKey::PuzzleResults)
    }

    fn save_puzzle_results(&self, results: &[PuzzleResult]) -> Result<(), StorageError> {
        save(self, StoreKey::PuzzleResults, &results)
    }

    fn load_tip_progress(&self) -> HashMap<TipId, TipProgress> {
        load_or_default(self, StoreKey::TipProgress)
    }

    fn save_tip_progress(
        &self,
        progress: &HashMap<TipId, TipProgress>,
    ) -> Result<(), StorageError> {
        save(self, StoreKey::TipProgress, progress)
    }

    fn load_bookmarks(&self) -> BTreeSet<TipId> {
        load_or_default(self, StoreKey::BookmarkedTips)
    }

    fn save_bookmarks(&self, bookmarks: &BTreeSet<TipId>) -> Result<(), StorageError> {
        save(self, StoreKey::BookmarkedTips, bookmarks)
    }

    fn load_preferences(&self) -> UserPreferences {
        load_or_default(self, StoreKey::Preferences)
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError> {
        save(self, StoreKey::Preferences, preferences)
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        for key in StoreKey::ALL {
            self.remove_raw(key)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and prototyping.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<&'static str, Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, Vec<u8>>> {
        // Single-writer access model; a poisoned lock only means a test
        // panicked mid-write, so recover the data.
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SnapshotStore for MemoryStore {
    fn read_raw(&self, key: StoreKey) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries().get(key.as_str()).cloned())
    }

    fn write_raw(&self, key: StoreKey, bytes: &[u8]) -> Result<(), StorageError> {
        self.entries().insert(key.as_str(), bytes.to_vec());
        Ok(())
    }

    fn remove_raw(&self, key: StoreKey) -> Result<(), StorageError> {
        self.entries().remove(key.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizfi_core::time::fixed_now;

    #[test]
    fn missing_snapshot_loads_as_empty() {
        let store = MemoryStore::new();
        assert!(store.load_quiz_results().is_empty());
        assert!(store.load_tip_progress().is_empty());
        assert_eq!(store.load_preferences(), UserPreferences::default());
    }

    #[test]
    fn corrupt_snapshot_loads_as_empty() {
        let store = MemoryStore::new();
        store.write_raw(StoreKey::QuizResults, b"{not json").unwrap();
        assert!(store.load_quiz_results().is_empty());
    }

    #[test]
    fn snapshots_round_trip() {
        let store = MemoryStore::new();

        let id = PuzzleId::new();
        let mut progress = HashMap::new();
        progress.insert(id, PuzzleProgress::started(id, fixed_now()));
        store.save_puzzle_progress(&progress).unwrap();
        assert_eq!(store.load_puzzle_progress(), progress);

        let bookmarks: BTreeSet<TipId> = [TipId::new(), TipId::new()].into();
        store.save_bookmarks(&bookmarks).unwrap();
        assert_eq!(store.load_bookmarks(), bookmarks);
    }

    #[test]
    fn clear_all_removes_every_key() {
        let store = MemoryStore::new();
        let mut prefs = UserPreferences::default();
        prefs.dark_mode_enabled = false;
        store.save_preferences(&prefs).unwrap();
        store.save_bookmarks(&[TipId::new()].into()).unwrap();

        store.clear_all().unwrap();
        assert_eq!(store.load_preferences(), UserPreferences::default());
        assert!(store.load_bookmarks().is_empty());
    }
}
