use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::ids::TipId;
use crate::model::quiz::Difficulty;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TipProgressError {
    #[error("action item index {index} out of range for {count} items")]
    InvalidIndex { index: usize, count: usize },
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// Topic bucket for a financial tip. Unknown persisted values decode as
/// `Mindset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TipCategory {
    Budgeting,
    Saving,
    Investing,
    CreditManagement,
    DebtReduction,
    EmergencyFund,
    Retirement,
    Insurance,
    Taxes,
    RealEstate,
    SideHustle,
    Mindset,
}

impl TipCategory {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::Budgeting => "Budgeting",
            TipCategory::Saving => "Saving",
            TipCategory::Investing => "Investing",
            TipCategory::CreditManagement => "Credit Management",
            TipCategory::DebtReduction => "Debt Reduction",
            TipCategory::EmergencyFund => "Emergency Fund",
            TipCategory::Retirement => "Retirement Planning",
            TipCategory::Insurance => "Insurance",
            TipCategory::Taxes => "Tax Planning",
            TipCategory::RealEstate => "Real Estate",
            TipCategory::SideHustle => "Side Hustle",
            TipCategory::Mindset => "Financial Mindset",
        }
    }

    pub const ALL: [TipCategory; 12] = [
        TipCategory::Budgeting,
        TipCategory::Saving,
        TipCategory::Investing,
        TipCategory::CreditManagement,
        TipCategory::DebtReduction,
        TipCategory::EmergencyFund,
        TipCategory::Retirement,
        TipCategory::Insurance,
        TipCategory::Taxes,
        TipCategory::RealEstate,
        TipCategory::SideHustle,
        TipCategory::Mindset,
    ];
}

impl From<String> for TipCategory {
    fn from(label: String) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .unwrap_or(TipCategory::Mindset)
    }
}

impl From<TipCategory> for String {
    fn from(category: TipCategory) -> Self {
        category.label().to_owned()
    }
}

//
// ─── FINANCIAL TIP ────────────────────────────────────────────────────────────
//

/// One article in the tip library. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTip {
    id: TipId,
    title: String,
    category: TipCategory,
    body: String,
    key_takeaways: Vec<String>,
    action_items: Vec<String>,
    difficulty: Difficulty,
    reading_minutes: u32,
    tags: BTreeSet<String>,
    related_topics: Vec<String>,
}

impl FinancialTip {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        category: TipCategory,
        body: impl Into<String>,
        key_takeaways: Vec<String>,
        action_items: Vec<String>,
        difficulty: Difficulty,
        reading_minutes: u32,
        tags: impl IntoIterator<Item = String>,
        related_topics: Vec<String>,
    ) -> Self {
        Self {
            id: TipId::new(),
            title: title.into(),
            category,
            body: body.into(),
            key_takeaways,
            action_items,
            difficulty,
            reading_minutes,
            tags: tags.into_iter().collect(),
            related_topics,
        }
    }

    #[must_use]
    pub fn id(&self) -> TipId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> TipCategory {
        self.category
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn key_takeaways(&self) -> &[String] {
        &self.key_takeaways
    }

    #[must_use]
    pub fn action_items(&self) -> &[String] {
        &self.action_items
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn reading_minutes(&self) -> u32 {
        self.reading_minutes
    }

    #[must_use]
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[must_use]
    pub fn related_topics(&self) -> &[String] {
        &self.related_topics
    }

    /// Case-insensitive match over title, body, and tags.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.body.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

//
// ─── TIP PROGRESS ─────────────────────────────────────────────────────────────
//

/// Mutable per-tip engagement record, created lazily on first interaction.
///
/// `completed_action_items` keeps list order for display but the mutators
/// enforce set semantics: an index appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipProgress {
    pub tip_id: TipId,
    pub is_read: bool,
    pub is_bookmarked: bool,
    pub completed_action_items: Vec<usize>,
    pub read_at: Option<DateTime<Utc>>,
    pub time_spent_secs: i64,
}

impl TipProgress {
    #[must_use]
    pub fn new(tip_id: TipId) -> Self {
        Self {
            tip_id,
            is_read: false,
            is_bookmarked: false,
            completed_action_items: Vec::new(),
            read_at: None,
            time_spent_secs: 0,
        }
    }

    /// Mark the tip read at `now`. Idempotent; the first read timestamp wins.
    pub fn mark_read(&mut self, now: DateTime<Utc>) {
        self.is_read = true;
        if self.read_at.is_none() {
            self.read_at = Some(now);
        }
    }

    /// Record an action item as done.
    ///
    /// Idempotent: completing the same index twice leaves one entry.
    ///
    /// # Errors
    ///
    /// Returns `TipProgressError::InvalidIndex` when `index` does not name
    /// one of the tip's `action_item_count` items.
    pub fn complete_action_item(
        &mut self,
        index: usize,
        action_item_count: usize,
    ) -> Result<(), TipProgressError> {
        if index >= action_item_count {
            return Err(TipProgressError::InvalidIndex {
                index,
                count: action_item_count,
            });
        }
        if !self.completed_action_items.contains(&index) {
            self.completed_action_items.push(index);
        }
        Ok(())
    }

    /// Remove an action item from the completed list. Unknown indices are a
    /// no-op.
    pub fn uncomplete_action_item(&mut self, index: usize) {
        self.completed_action_items.retain(|&done| done != index);
    }

    /// Fraction of the tip worked through, as a percentage.
    ///
    /// Tips without action items fall back to the read flag.
    #[must_use]
    pub fn completion_percentage(&self, action_item_count: usize) -> f64 {
        if action_item_count == 0 {
            return if self.is_read { 100.0 } else { 0.0 };
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.completed_action_items.len() as f64 / action_item_count as f64;
        ratio * 100.0
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
