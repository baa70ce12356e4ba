//! Derived statistics over the progress history.
//!
//! Everything here is a pure read: the inputs are borrowed collections and
//! nothing is mutated. All averages are defined as zero over empty input.

use std::collections::{BTreeSet, HashMap};

use crate::model::{PuzzleResult, QuizResult, TipId, TipProgress};

/// Summary over the quiz result history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuizStats {
    pub completed: usize,
    pub average_percentage: f64,
    pub total_secs: i64,
}

/// Summary over the completed puzzle history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PuzzleStats {
    pub completed: usize,
    pub average_efficiency: f64,
    pub total_secs: i64,
}

/// Summary over tip engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TipStats {
    pub read: usize,
    pub bookmarked: usize,
    pub action_items_completed: usize,
}

/// Everything the settings screen shows, in one place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserStats {
    pub quizzes: QuizStats,
    pub puzzles: PuzzleStats,
    pub tips: TipStats,
}

impl UserStats {
    /// Seconds spent across quizzes and puzzles.
    #[must_use]
    pub fn total_secs(&self) -> i64 {
        self.quizzes.total_secs + self.puzzles.total_secs
    }

    /// Weighted activity count shown on the settings screen.
    ///
    /// A presentational heuristic, not a calibrated score: completions
    /// weigh 0.3 each, reads and action items 0.2 each, with no
    /// normalization.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn overall_engagement(&self) -> f64 {
        self.quizzes.completed as f64 * 0.3
            + self.puzzles.completed as f64 * 0.3
            + self.tips.read as f64 * 0.2
            + self.tips.action_items_completed as f64 * 0.2
    }
}

/// Aggregate the quiz result history.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quiz_stats(results: &[QuizResult]) -> QuizStats {
    let completed = results.len();
    let average_percentage = if completed == 0 {
        0.0
    } else {
        results.iter().map(QuizResult::percentage).sum::<f64>() / completed as f64
    };
    let total_secs = results.iter().map(|r| r.completion_secs).sum();

    QuizStats {
        completed,
        average_percentage,
        total_secs,
    }
}

/// Aggregate the completed puzzle history.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn puzzle_stats(results: &[PuzzleResult]) -> PuzzleStats {
    let completed = results.len();
    let average_efficiency = if completed == 0 {
        0.0
    } else {
        results.iter().map(PuzzleResult::efficiency).sum::<f64>() / completed as f64
    };
    let total_secs = results.iter().map(|r| r.completion_secs).sum();

    PuzzleStats {
        completed,
        average_efficiency,
        total_secs,
    }
}

/// Aggregate tip engagement.
///
/// The bookmark count comes from the bookmark set, which the tip service
/// keeps consistent with the per-tip progress flags.
#[must_use]
pub fn tip_stats(
    progress: &HashMap<TipId, TipProgress>,
    bookmarks: &BTreeSet<TipId>,
) -> TipStats {
    TipStats {
        read: progress.values().filter(|p| p.is_read).count(),
        bookmarked: bookmarks.len(),
        action_items_completed: progress
            .values()
            .map(|p| p.completed_action_items.len())
            .sum(),
    }
}

/// Share of the tip library that has been read, as a percentage.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percentage(read_count: usize, total_tip_count: usize) -> f64 {
    if total_tip_count == 0 {
        return 0.0;
    }
    read_count as f64 / total_tip_count as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Puzzle, PuzzleDifficulty, PuzzleKind, QuizId,
    };
    use crate::time::fixed_now;

    fn quiz_result(score: u32, total: u32, secs: i64) -> QuizResult {
        QuizResult {
            quiz_id: QuizId::new(),
            quiz_title: "q".into(),
            score,
            total_points: total,
            completion_secs: secs,
            correct_answers: 0,
            total_questions: 1,
            completed_at: fixed_now(),
        }
    }

    fn puzzle_result(points: u32, hints: u32, attempts: u32, secs: i64) -> PuzzleResult {
        let puzzle = Puzzle::new(
            "p",
            "d",
            PuzzleKind::LogicPuzzle,
            PuzzleDifficulty::Easy,
            "s",
            "q",
            "a",
            Vec::new(),
            "e",
            points,
            5,
        )
        .unwrap();
        PuzzleResult {
            puzzle,
            hints_used: hints,
            attempts,
            completion_secs: secs,
            score: 0,
            completed_at: fixed_now(),
        }
    }

    #[test]
    fn empty_histories_have_zero_stats() {
        assert_eq!(quiz_stats(&[]), QuizStats::default());
        assert_eq!(puzzle_stats(&[]), PuzzleStats::default());
    }

    #[test]
    fn quiz_stats_averages_percentages() {
        let stats = quiz_stats(&[quiz_result(50, 100, 60), quiz_result(100, 100, 30)]);
        assert_eq!(stats.completed, 2);
        assert!((stats.average_percentage - 75.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_secs, 90);
    }

    #[test]
    fn puzzle_stats_average_efficiency() {
        // 100% and 40% -> 70%
        let stats = puzzle_stats(&[
            puzzle_result(50, 0, 1, 10),
            puzzle_result(50, 2, 3, 20),
        ]);
        assert!((stats.average_efficiency - 70.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_secs, 30);
    }

    #[test]
    fn tip_stats_counts_reads_and_items() {
        let mut progress = HashMap::new();
        let mut bookmarks = BTreeSet::new();

        let read_id = TipId::new();
        let mut read = TipProgress::new(read_id);
        read.mark_read(fixed_now());
        read.complete_action_item(0, 2).unwrap();
        read.complete_action_item(1, 2).unwrap();
        progress.insert(read_id, read);

        let other_id = TipId::new();
        progress.insert(other_id, TipProgress::new(other_id));
        bookmarks.insert(other_id);

        let stats = tip_stats(&progress, &bookmarks);
        assert_eq!(stats.read, 1);
        assert_eq!(stats.bookmarked, 1);
        assert_eq!(stats.action_items_completed, 2);
    }

    #[test]
    fn progress_percentage_handles_empty_library() {
        assert_eq!(progress_percentage(0, 0), 0.0);
        assert!((progress_percentage(3, 10) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn engagement_is_the_documented_weighted_sum() {
        let stats = UserStats {
            quizzes: QuizStats { completed: 2, average_percentage: 0.0, total_secs: 10 },
            puzzles: PuzzleStats { completed: 1, average_efficiency: 0.0, total_secs: 5 },
            tips: TipStats { read: 3, bookmarked: 0, action_items_completed: 4 },
        };
        // 0.3*2 + 0.3*1 + 0.2*3 + 0.2*4 = 2.3
        assert!((stats.overall_engagement() - 2.3).abs() < 1e-9);
        assert_eq!(stats.total_secs(), 15);
    }
}
