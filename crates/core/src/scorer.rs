//! Answer scoring for open-ended puzzles.
//!
//! Correctness is an approximate keyword-overlap heuristic, not semantic
//! understanding: both texts are normalized and tokenized, and the user's
//! answer passes when it covers enough of the domain keywords the canonical
//! answer uses. False positives and negatives are accepted product behavior.

use std::collections::BTreeSet;

/// Points deducted per hint taken.
pub const HINT_PENALTY: u32 = 10;

/// Points deducted per failed attempt before the successful one.
pub const ATTEMPT_PENALTY: u32 = 5;

/// Keyword coverage required for an answer to count as correct.
///
/// Tunable policy constant, not user-configurable.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// The closed, hand-maintained vocabulary of finance terms the matcher
/// recognizes.
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "debt",
    "avalanche",
    "snowball",
    "interest",
    "rate",
    "minimum",
    "payment",
    "stocks",
    "bonds",
    "cash",
    "allocation",
    "percentage",
    "budget",
    "reduce",
    "save",
    "entertainment",
    "shopping",
];

/// Deduction-based puzzle score.
///
/// `attempts` counts every submission including the successful one, so a
/// first-try solve incurs no attempt penalty. Never negative; saturates
/// at zero.
#[must_use]
pub fn compute_score(base_points: u32, hints_used: u32, attempts: u32) -> u32 {
    let hint_penalty = hints_used.saturating_mul(HINT_PENALTY);
    let attempt_penalty = attempts.saturating_sub(1).saturating_mul(ATTEMPT_PENALTY);
    base_points
        .saturating_sub(hint_penalty)
        .saturating_sub(attempt_penalty)
}

/// Policy object for the keyword-overlap matcher.
///
/// The vocabulary and threshold are hard-coded heuristics in the product;
/// they are parameters here so tests and future tuning don't have to patch
/// constants.
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    keywords: BTreeSet<String>,
    threshold: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            keywords: DOMAIN_KEYWORDS.iter().map(|kw| (*kw).to_owned()).collect(),
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl MatchPolicy {
    /// Build a policy with a custom vocabulary and threshold.
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = String>, threshold: f64) -> Self {
        Self {
            keywords: keywords.into_iter().map(|kw| kw.to_lowercase()).collect(),
            threshold,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decide whether `user_text` is close enough to `canonical_text`.
    ///
    /// When the canonical text names any vocabulary words, the user must
    /// cover at least `threshold` of them. Otherwise falls back to substring
    /// containment in either direction after normalization.
    #[must_use]
    pub fn matches(&self, user_text: &str, canonical_text: &str) -> bool {
        let user_norm = normalize(user_text);
        let canonical_norm = normalize(canonical_text);

        let canonical_keywords = self.keywords_in(&canonical_norm);
        if !canonical_keywords.is_empty() {
            let user_keywords = self.keywords_in(&user_norm);
            let shared = user_keywords.intersection(&canonical_keywords).count();
            #[allow(clippy::cast_precision_loss)]
            let ratio = shared as f64 / canonical_keywords.len() as f64;
            return ratio >= self.threshold;
        }

        user_norm.contains(&canonical_norm) || canonical_norm.contains(&user_norm)
    }

    fn keywords_in<'a>(&'a self, text: &str) -> BTreeSet<&'a str> {
        tokenize(text)
            .filter_map(|word| self.keywords.get(word).map(String::as_str))
            .collect()
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whitespace-delimited words with edge punctuation stripped, so
/// "avalanche:" and "rate," still count as vocabulary hits.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}
