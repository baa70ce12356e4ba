//! The tip library: read tracking, bookmarks, action-item checklists, and
//! the featured/recommended shelves.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use quizfi_core::Clock;
use quizfi_core::model::{FinancialTip, TipCategory, TipId, TipProgress};
use quizfi_core::stats::{TipStats, tip_stats};
use quizfi_core::stats;
use storage::ProgressStore;

use crate::catalog::ContentCatalog;
use crate::error::TipError;
use crate::events::{EventQueue, ProgressEvent};

/// How many tips the featured shelf holds.
const FEATURED_COUNT: usize = 3;

/// How many tips the recommendation shelf holds.
const RECOMMENDED_COUNT: usize = 5;

/// Tracks per-tip engagement and the bookmark set.
///
/// Progress records are created lazily on first interaction. The bookmark
/// set is tracked separately from the per-tip records but every toggle
/// updates both, so they never disagree.
pub struct TipService {
    catalog: Arc<ContentCatalog>,
    store: Arc<dyn ProgressStore>,
    events: Arc<EventQueue>,
    clock: Clock,
    progress: HashMap<TipId, TipProgress>,
    bookmarks: BTreeSet<TipId>,
}

impl TipService {
    #[must_use]
    pub fn new(
        catalog: Arc<ContentCatalog>,
        store: Arc<dyn ProgressStore>,
        events: Arc<EventQueue>,
        clock: Clock,
    ) -> Self {
        let progress = store.load_tip_progress();
        let bookmarks = store.load_bookmarks();
        Self {
            catalog,
            store,
            events,
            clock,
            progress,
            bookmarks,
        }
    }

    fn entry(&mut self, tip_id: TipId) -> &mut TipProgress {
        self.progress
            .entry(tip_id)
            .or_insert_with(|| TipProgress::new(tip_id))
    }

    /// Mark a tip as read. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `TipError::UnknownTip` for an id not in the catalog, or
    /// `TipError::Storage` if the snapshot cannot be written.
    pub fn mark_read(&mut self, tip_id: TipId) -> Result<(), TipError> {
        if self.catalog.tip(tip_id).is_none() {
            return Err(TipError::UnknownTip);
        }
        let now = self.clock.now();
        self.entry(tip_id).mark_read(now);
        self.store.save_tip_progress(&self.progress)?;
        self.events.push(ProgressEvent::TipRead { tip_id, at: now });
        Ok(())
    }

    /// Flip a tip's bookmark. Returns the new state.
    ///
    /// Both the bookmark set and the per-tip flag are updated, in either
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns `TipError::UnknownTip` for an id not in the catalog, or
    /// `TipError::Storage` if a snapshot cannot be written.
    pub fn toggle_bookmark(&mut self, tip_id: TipId) -> Result<bool, TipError> {
        if self.catalog.tip(tip_id).is_none() {
            return Err(TipError::UnknownTip);
        }
        let bookmarked = if self.bookmarks.remove(&tip_id) {
            if let Some(progress) = self.progress.get_mut(&tip_id) {
                progress.is_bookmarked = false;
            }
            false
        } else {
            self.bookmarks.insert(tip_id);
            self.entry(tip_id).is_bookmarked = true;
            true
        };
        self.store.save_bookmarks(&self.bookmarks)?;
        self.store.save_tip_progress(&self.progress)?;
        self.events.push(ProgressEvent::BookmarkToggled { tip_id, bookmarked });
        Ok(bookmarked)
    }

    /// Check off one of a tip's action items. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `TipError::UnknownTip` for an id not in the catalog,
    /// `TipError::Progress` for an out-of-range index, or
    /// `TipError::Storage` if the snapshot cannot be written.
    pub fn complete_action_item(&mut self, tip_id: TipId, index: usize) -> Result<(), TipError> {
        let item_count = self
            .catalog
            .tip(tip_id)
            .ok_or(TipError::UnknownTip)?
            .action_items()
            .len();
        self.entry(tip_id).complete_action_item(index, item_count)?;
        self.store.save_tip_progress(&self.progress)?;
        self.events.push(ProgressEvent::ActionItemToggled {
            tip_id,
            index,
            completed: true,
        });
        Ok(())
    }

    /// Uncheck an action item. A no-op for tips with no progress record.
    ///
    /// # Errors
    ///
    /// Returns `TipError::Storage` if the snapshot cannot be written.
    pub fn uncomplete_action_item(&mut self, tip_id: TipId, index: usize) -> Result<(), TipError> {
        if let Some(progress) = self.progress.get_mut(&tip_id) {
            progress.uncomplete_action_item(index);
            self.store.save_tip_progress(&self.progress)?;
            self.events.push(ProgressEvent::ActionItemToggled {
                tip_id,
                index,
                completed: false,
            });
        }
        Ok(())
    }

    /// Add time spent reading a tip, in whole seconds.
    ///
    /// # Errors
    ///
    /// Returns `TipError::UnknownTip` for an id not in the catalog, or
    /// `TipError::Storage` if the snapshot cannot be written.
    pub fn record_time_spent(&mut self, tip_id: TipId, secs: i64) -> Result<(), TipError> {
        if self.catalog.tip(tip_id).is_none() {
            return Err(TipError::UnknownTip);
        }
        self.entry(tip_id).time_spent_secs += secs.max(0);
        self.store.save_tip_progress(&self.progress)?;
        Ok(())
    }

    #[must_use]
    pub fn progress_for(&self, tip_id: TipId) -> Option<&TipProgress> {
        self.progress.get(&tip_id)
    }

    #[must_use]
    pub fn is_bookmarked(&self, tip_id: TipId) -> bool {
        self.bookmarks.contains(&tip_id)
    }

    /// The bookmarked tips, in catalog order.
    #[must_use]
    pub fn bookmarked_tips(&self) -> Vec<&FinancialTip> {
        self.catalog
            .tips()
            .iter()
            .filter(|tip| self.bookmarks.contains(&tip.id()))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> TipStats {
        tip_stats(&self.progress, &self.bookmarks)
    }

    /// Share of the library that has been read, as a percentage.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        stats::progress_percentage(self.stats().read, self.catalog.tips().len())
    }

    /// The featured shelf: one budgeting tip, one saving tip, topped up
    /// with beginner tips. A fixed heuristic, not a model.
    #[must_use]
    pub fn featured_tips(&self) -> Vec<&FinancialTip> {
        let mut featured: Vec<&FinancialTip> = Vec::new();
        let mut seen: HashSet<TipId> = HashSet::new();

        for category in [TipCategory::Budgeting, TipCategory::Saving] {
            if let Some(tip) = self.catalog.tips_by_category(category).into_iter().next() {
                if seen.insert(tip.id()) {
                    featured.push(tip);
                }
            }
        }

        for tip in self.catalog.tips() {
            if featured.len() >= FEATURED_COUNT {
                break;
            }
            if tip.difficulty() == quizfi_core::model::Difficulty::Beginner
                && seen.insert(tip.id())
            {
                featured.push(tip);
            }
        }

        featured
    }

    /// Unread tips, with categories the user has already read from first.
    /// A fixed heuristic, not a model.
    #[must_use]
    pub fn recommended_tips(&self) -> Vec<&FinancialTip> {
        let read_ids: HashSet<TipId> = self
            .progress
            .iter()
            .filter(|(_, p)| p.is_read)
            .map(|(&id, _)| id)
            .collect();
        let read_categories: HashSet<TipCategory> = self
            .catalog
            .tips()
            .iter()
            .filter(|tip| read_ids.contains(&tip.id()))
            .map(FinancialTip::category)
            .collect();

        let unread = || {
            self.catalog
                .tips()
                .iter()
                .filter(|tip| !read_ids.contains(&tip.id()))
        };
        let mut recommended: Vec<&FinancialTip> = unread()
            .filter(|tip| read_categories.contains(&tip.category()))
            .collect();
        recommended.extend(unread().filter(|tip| !read_categories.contains(&tip.category())));
        recommended.truncate(RECOMMENDED_COUNT);
        recommended
    }

    /// Drop all tip progress and bookmarks, in memory and persisted.
    ///
    /// # Errors
    ///
    /// Returns `TipError::Storage` if a snapshot cannot be written.
    pub fn clear(&mut self) -> Result<(), TipError> {
        self.progress.clear();
        self.bookmarks.clear();
        self.store.save_tip_progress(&self.progress)?;
        self.store.save_bookmarks(&self.bookmarks)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizfi_core::time::fixed_clock;
    use storage::MemoryStore;

    fn service() -> TipService {
        TipService::new(
            Arc::new(ContentCatalog::builtin().unwrap()),
            Arc::new(MemoryStore::new()),
            Arc::new(EventQueue::new()),
            fixed_clock(),
        )
    }

    fn first_tip_id(service: &TipService) -> TipId {
        service.catalog.tips()[0].id()
    }

    #[test]
    fn unknown_tip_is_rejected() {
        let mut service = service();
        assert!(matches!(service.mark_read(TipId::new()), Err(TipError::UnknownTip)));
        assert!(matches!(
            service.toggle_bookmark(TipId::new()),
            Err(TipError::UnknownTip)
        ));
    }

    #[test]
    fn progress_record_is_created_lazily() {
        let mut service = service();
        let id = first_tip_id(&service);
        assert!(service.progress_for(id).is_none());

        service.mark_read(id).unwrap();
        let progress = service.progress_for(id).unwrap();
        assert!(progress.is_read);
        assert!(progress.read_at.is_some());
    }

    #[test]
    fn toggling_a_bookmark_twice_restores_the_original_state() {
        let mut service = service();
        let id = first_tip_id(&service);

        assert!(service.toggle_bookmark(id).unwrap());
        assert!(service.is_bookmarked(id));
        assert!(service.progress_for(id).unwrap().is_bookmarked);
        assert_eq!(service.stats().bookmarked, 1);

        assert!(!service.toggle_bookmark(id).unwrap());
        assert!(!service.is_bookmarked(id));
        assert!(!service.progress_for(id).unwrap().is_bookmarked);
        assert_eq!(service.stats().bookmarked, 0);
    }

    #[test]
    fn action_item_bounds_are_enforced() {
        let mut service = service();
        let id = first_tip_id(&service);
        let count = service.catalog.tip(id).unwrap().action_items().len();

        assert!(matches!(
            service.complete_action_item(id, count),
            Err(TipError::Progress(_))
        ));
        service.complete_action_item(id, 0).unwrap();
        service.complete_action_item(id, 0).unwrap();
        assert_eq!(service.stats().action_items_completed, 1);

        service.uncomplete_action_item(id, 0).unwrap();
        assert_eq!(service.stats().action_items_completed, 0);
    }

    #[test]
    fn progress_percentage_tracks_reads() {
        let mut service = service();
        let total = service.catalog.tips().len();
        assert_eq!(service.progress_percentage(), 0.0);

        service.mark_read(first_tip_id(&service)).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = 1.0 / total as f64 * 100.0;
        assert!((service.progress_percentage() - expected).abs() < 1e-9);
    }

    #[test]
    fn featured_shelf_leads_with_budgeting_and_saving() {
        let service = service();
        let featured = service.featured_tips();
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].category(), TipCategory::Budgeting);
        assert_eq!(featured[1].category(), TipCategory::Saving);
    }

    #[test]
    fn recommendations_exclude_read_tips_and_prefer_read_categories() {
        let mut service = service();
        let budgeting_id = service.catalog.tips_by_category(TipCategory::Budgeting)[0].id();
        service.mark_read(budgeting_id).unwrap();

        let recommended = service.recommended_tips();
        assert!(recommended.iter().all(|tip| tip.id() != budgeting_id));
        assert!(recommended.len() <= RECOMMENDED_COUNT);
        // The read category leads if it still has unread tips; otherwise the
        // shelf is simply the unread remainder.
        if let Some(first) = recommended.first() {
            if service
                .catalog
                .tips_by_category(TipCategory::Budgeting)
                .len()
                > 1
            {
                assert_eq!(first.category(), TipCategory::Budgeting);
            }
        }
    }

    #[test]
    fn state_survives_a_service_restart() {
        let catalog = Arc::new(ContentCatalog::builtin().unwrap());
        let store = Arc::new(MemoryStore::new());
        let events = Arc::new(EventQueue::new());

        let id;
        {
            let mut service = TipService::new(
                Arc::clone(&catalog),
                Arc::clone(&store) as Arc<dyn ProgressStore>,
                Arc::clone(&events),
                fixed_clock(),
            );
            id = first_tip_id(&service);
            service.mark_read(id).unwrap();
            service.toggle_bookmark(id).unwrap();
        }

        let service = TipService::new(catalog, store, events, fixed_clock());
        assert!(service.progress_for(id).unwrap().is_read);
        assert!(service.is_bookmarked(id));
    }
}
