use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::PuzzleId;
use crate::scorer::{ATTEMPT_PENALTY, HINT_PENALTY};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating puzzle content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PuzzleValidationError {
    #[error("puzzle has a non-positive point value")]
    NonPositivePoints,

    #[error("puzzle has an empty canonical answer")]
    EmptyAnswer,
}

//
// ─── KIND AND DIFFICULTY ──────────────────────────────────────────────────────
//

/// The flavor of scenario a puzzle presents. Unknown persisted values
/// decode as `LogicPuzzle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PuzzleKind {
    BudgetOptimization,
    InvestmentStrategy,
    DebtPayoff,
    SavingsGoal,
    RiskAssessment,
    CompoundInterest,
    TaxOptimization,
    LogicPuzzle,
}

impl PuzzleKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PuzzleKind::BudgetOptimization => "Budget Optimization",
            PuzzleKind::InvestmentStrategy => "Investment Strategy",
            PuzzleKind::DebtPayoff => "Debt Payoff",
            PuzzleKind::SavingsGoal => "Savings Goal",
            PuzzleKind::RiskAssessment => "Risk Assessment",
            PuzzleKind::CompoundInterest => "Compound Interest",
            PuzzleKind::TaxOptimization => "Tax Optimization",
            PuzzleKind::LogicPuzzle => "Logic Puzzle",
        }
    }

    pub const ALL: [PuzzleKind; 8] = [
        PuzzleKind::BudgetOptimization,
        PuzzleKind::InvestmentStrategy,
        PuzzleKind::DebtPayoff,
        PuzzleKind::SavingsGoal,
        PuzzleKind::RiskAssessment,
        PuzzleKind::CompoundInterest,
        PuzzleKind::TaxOptimization,
        PuzzleKind::LogicPuzzle,
    ];
}

impl From<String> for PuzzleKind {
    fn from(label: String) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
            .unwrap_or(PuzzleKind::LogicPuzzle)
    }
}

impl From<PuzzleKind> for String {
    fn from(kind: PuzzleKind) -> Self {
        kind.label().to_owned()
    }
}

/// Puzzle difficulty has its own four-tier scale. Unknown persisted values
/// decode as `Easy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PuzzleDifficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl PuzzleDifficulty {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PuzzleDifficulty::Easy => "Easy",
            PuzzleDifficulty::Medium => "Medium",
            PuzzleDifficulty::Hard => "Hard",
            PuzzleDifficulty::Expert => "Expert",
        }
    }
}

impl From<String> for PuzzleDifficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Medium" => PuzzleDifficulty::Medium,
            "Hard" => PuzzleDifficulty::Hard,
            "Expert" => PuzzleDifficulty::Expert,
            _ => PuzzleDifficulty::Easy,
        }
    }
}

impl From<PuzzleDifficulty> for String {
    fn from(difficulty: PuzzleDifficulty) -> Self {
        difficulty.label().to_owned()
    }
}

//
// ─── PUZZLE ───────────────────────────────────────────────────────────────────
//

/// An open-ended financial puzzle with a free-text answer.
///
/// Immutable once validated. The canonical answer is matched against user
/// text by the scorer's keyword heuristic, not compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    id: PuzzleId,
    title: String,
    description: String,
    kind: PuzzleKind,
    difficulty: PuzzleDifficulty,
    scenario: String,
    question: String,
    correct_answer: String,
    hints: Vec<String>,
    explanation: String,
    points: u32,
    estimated_minutes: u32,
}

impl Puzzle {
    /// Validate and build a puzzle.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleValidationError` if points are zero or the canonical
    /// answer is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: PuzzleKind,
        difficulty: PuzzleDifficulty,
        scenario: impl Into<String>,
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        hints: Vec<String>,
        explanation: impl Into<String>,
        points: u32,
        estimated_minutes: u32,
    ) -> Result<Self, PuzzleValidationError> {
        if points == 0 {
            return Err(PuzzleValidationError::NonPositivePoints);
        }
        let correct_answer = correct_answer.into();
        if correct_answer.trim().is_empty() {
            return Err(PuzzleValidationError::EmptyAnswer);
        }

        Ok(Self {
            id: PuzzleId::new(),
            title: title.into(),
            description: description.into(),
            kind,
            difficulty,
            scenario: scenario.into(),
            question: question.into(),
            correct_answer,
            hints,
            explanation: explanation.into(),
            points,
            estimated_minutes,
        })
    }

    #[must_use]
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn kind(&self) -> PuzzleKind {
        self.kind
    }

    #[must_use]
    pub fn difficulty(&self) -> PuzzleDifficulty {
        self.difficulty
    }

    #[must_use]
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }
}

//
// ─── PUZZLE PROGRESS ──────────────────────────────────────────────────────────
//

/// Mutable per-session record of one puzzle attempt.
///
/// Attempts only grow via answer submission; the score is written exactly
/// once, when the first correct answer lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleProgress {
    pub puzzle_id: PuzzleId,
    pub hints_used: u32,
    pub attempts: u32,
    pub is_completed: bool,
    /// Wall-clock seconds from start to completion, set on success.
    pub completion_secs: Option<i64>,
    pub score: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl PuzzleProgress {
    /// A fresh record for a puzzle started at `now`.
    #[must_use]
    pub fn started(puzzle_id: PuzzleId, now: DateTime<Utc>) -> Self {
        Self {
            puzzle_id,
            hints_used: 0,
            attempts: 0,
            is_completed: false,
            completion_secs: None,
            score: 0,
            started_at: now,
            completed_at: None,
        }
    }
}

//
// ─── PUZZLE RESULT ────────────────────────────────────────────────────────────
//

/// Immutable snapshot of a completed puzzle attempt, joined with its puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleResult {
    pub puzzle: Puzzle,
    pub hints_used: u32,
    /// Total submissions, including the one that succeeded.
    pub attempts: u32,
    pub completion_secs: i64,
    pub score: u32,
    pub completed_at: DateTime<Utc>,
}

impl PuzzleResult {
    /// Percentage of the puzzle's points retained after hint and attempt
    /// deductions. 100.0 for a first-try, no-hint solve.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        let max_score = self.puzzle.points();
        let hint_penalty = self.hints_used.saturating_mul(HINT_PENALTY);
        let attempt_penalty = self.attempts.saturating_sub(1).saturating_mul(ATTEMPT_PENALTY);
        let final_score = max_score.saturating_sub(hint_penalty).saturating_sub(attempt_penalty);
        f64::from(final_score) / f64::from(max_score) * 100.0
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn puzzle(points: u32) -> Puzzle {
        Puzzle::new(
            "The Debt Elimination Strategy",
            "Pick the best payoff order.",
            PuzzleKind::DebtPayoff,
            PuzzleDifficulty::Medium,
            "Three debts at different rates.",
            "Snowball or avalanche?",
            "Use debt avalanche: pay minimums, extra toward highest interest rate",
            vec!["Compare interest rates".into()],
            "Avalanche saves the most interest.",
            points,
            12,
        )
        .unwrap()
    }

    fn result(points: u32, hints_used: u32, attempts: u32) -> PuzzleResult {
        PuzzleResult {
            puzzle: puzzle(points),
            hints_used,
            attempts,
            completion_secs: 90,
            score: 0,
            completed_at: fixed_now(),
        }
    }

    #[test]
    fn rejects_zero_points() {
        let err = Puzzle::new(
            "t",
            "d",
            PuzzleKind::LogicPuzzle,
            PuzzleDifficulty::Easy,
            "s",
            "q",
            "a",
            Vec::new(),
            "e",
            0,
            1,
        )
        .unwrap_err();
        assert_eq!(err, PuzzleValidationError::NonPositivePoints);
    }

    #[test]
    fn rejects_blank_canonical_answer() {
        let err = Puzzle::new(
            "t",
            "d",
            PuzzleKind::LogicPuzzle,
            PuzzleDifficulty::Easy,
            "s",
            "q",
            "   ",
            Vec::new(),
            "e",
            10,
            1,
        )
        .unwrap_err();
        assert_eq!(err, PuzzleValidationError::EmptyAnswer);
    }

    #[test]
    fn clean_solve_is_full_efficiency() {
        assert!((result(50, 0, 1).efficiency() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn efficiency_applies_both_penalties() {
        // 50 - 10*2 - 5*2 = 20 -> 40%
        assert!((result(50, 2, 3).efficiency() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn efficiency_clamps_at_zero() {
        assert_eq!(result(20, 5, 10).efficiency(), 0.0);
    }

    #[test]
    fn unknown_kind_falls_back_to_logic_puzzle() {
        let decoded: PuzzleKind = serde_json::from_str("\"Crystal Ball\"").unwrap();
        assert_eq!(decoded, PuzzleKind::LogicPuzzle);
    }

    #[test]
    fn fresh_progress_starts_clean() {
        let progress = PuzzleProgress::started(PuzzleId::new(), fixed_now());
        assert_eq!(progress.attempts, 0);
        assert!(!progress.is_completed);
        assert!(progress.completed_at.is_none());
    }
}
