mod ids;
mod preferences;
mod puzzle;
mod quiz;
mod tip;

pub use ids::{PuzzleId, QuestionId, QuizId, TipId};

pub use preferences::UserPreferences;
pub use puzzle::{
    Puzzle, PuzzleDifficulty, PuzzleKind, PuzzleProgress, PuzzleResult, PuzzleValidationError,
};
pub use quiz::{Difficulty, Quiz, QuizCategory, QuizQuestion, QuizResult, QuizValidationError};
pub use tip::{FinancialTip, TipCategory, TipProgress, TipProgressError};
