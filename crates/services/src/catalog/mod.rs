//! The static content catalog: every quiz, puzzle, and tip in the app.
//!
//! Content is compiled in, not fetched; the catalog is built once at startup
//! and handed to the services that need it.

mod builtin;

use rand::seq::IndexedRandom;
use thiserror::Error;

use quizfi_core::model::{
    Difficulty, FinancialTip, Puzzle, PuzzleDifficulty, PuzzleId, PuzzleKind,
    PuzzleValidationError, Quiz, QuizCategory, QuizId, QuizValidationError, TipCategory, TipId,
};

/// Errors raised while assembling catalog content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Quiz(#[from] QuizValidationError),
    #[error(transparent)]
    Puzzle(#[from] PuzzleValidationError),
}

/// Immutable content source shared by every service.
pub struct ContentCatalog {
    quizzes: Vec<Quiz>,
    puzzles: Vec<Puzzle>,
    tips: Vec<FinancialTip>,
}

impl ContentCatalog {
    /// Build a catalog from explicit content, mainly for tests.
    #[must_use]
    pub fn new(quizzes: Vec<Quiz>, puzzles: Vec<Puzzle>, tips: Vec<FinancialTip>) -> Self {
        Self {
            quizzes,
            puzzles,
            tips,
        }
    }

    /// The shipped financial-literacy content.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any built-in entry fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            quizzes: builtin::quizzes()?,
            puzzles: builtin::puzzles()?,
            tips: builtin::tips(),
        })
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    #[must_use]
    pub fn tips(&self) -> &[FinancialTip] {
        &self.tips
    }

    #[must_use]
    pub fn quiz(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id() == id)
    }

    #[must_use]
    pub fn puzzle(&self, id: PuzzleId) -> Option<&Puzzle> {
        self.puzzles.iter().find(|puzzle| puzzle.id() == id)
    }

    #[must_use]
    pub fn tip(&self, id: TipId) -> Option<&FinancialTip> {
        self.tips.iter().find(|tip| tip.id() == id)
    }

    #[must_use]
    pub fn quizzes_by_category(&self, category: QuizCategory) -> Vec<&Quiz> {
        self.quizzes.iter().filter(|q| q.category() == category).collect()
    }

    #[must_use]
    pub fn quizzes_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Quiz> {
        self.quizzes.iter().filter(|q| q.difficulty() == difficulty).collect()
    }

    #[must_use]
    pub fn puzzles_by_kind(&self, kind: PuzzleKind) -> Vec<&Puzzle> {
        self.puzzles.iter().filter(|p| p.kind() == kind).collect()
    }

    #[must_use]
    pub fn puzzles_by_difficulty(&self, difficulty: PuzzleDifficulty) -> Vec<&Puzzle> {
        self.puzzles.iter().filter(|p| p.difficulty() == difficulty).collect()
    }

    #[must_use]
    pub fn tips_by_category(&self, category: TipCategory) -> Vec<&FinancialTip> {
        self.tips.iter().filter(|t| t.category() == category).collect()
    }

    #[must_use]
    pub fn tips_by_difficulty(&self, difficulty: Difficulty) -> Vec<&FinancialTip> {
        self.tips.iter().filter(|t| t.difficulty() == difficulty).collect()
    }

    /// Case-insensitive search over tip titles, bodies, and tags. A blank
    /// query returns everything.
    #[must_use]
    pub fn search_tips(&self, query: &str) -> Vec<&FinancialTip> {
        let query = query.trim();
        if query.is_empty() {
            return self.tips.iter().collect();
        }
        self.tips.iter().filter(|tip| tip.matches_search(query)).collect()
    }

    /// A quiz picked uniformly at random, for the "surprise me" entry point.
    #[must_use]
    pub fn random_quiz(&self) -> Option<&Quiz> {
        self.quizzes.choose(&mut rand::rng())
    }
}
