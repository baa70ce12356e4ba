#![forbid(unsafe_code)]

pub mod model;
pub mod scorer;
pub mod stats;
pub mod time;

pub use time::Clock;

pub use scorer::{MatchPolicy, compute_score};
pub use stats::{PuzzleStats, QuizStats, TipStats, UserStats, progress_percentage};
