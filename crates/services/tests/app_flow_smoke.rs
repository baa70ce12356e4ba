//! End-to-end smoke test: a full evening of app usage against an on-disk
//! store, then a restart, an export, and a factory reset.

use std::sync::Arc;

use quizfi_core::time::fixed_clock;
use services::{AppServices, Clock, ProgressEvent, QuizSession};
use storage::{JsonFileStore, ProgressStore};

fn app_on(dir: &std::path::Path, clock: Clock) -> AppServices {
    let store = JsonFileStore::open(dir).unwrap();
    AppServices::new(Arc::new(store) as Arc<dyn ProgressStore>, clock).unwrap()
}

#[test]
fn full_session_survives_restart_export_and_reset() {
    let dir = tempfile::tempdir().unwrap();
    let clock = fixed_clock();

    {
        let mut app = app_on(dir.path(), clock);

        // Take a quiz, answering every question correctly.
        let quiz = app.catalog().quizzes()[0].clone();
        let total_points = quiz.total_points();
        let mut session = QuizSession::start(quiz, clock);
        let result = loop {
            let index = session.current_question().unwrap().correct_answer_index;
            session.select_answer(index).unwrap();
            if let Some(result) = session.advance().unwrap() {
                break result;
            }
        };
        assert_eq!(result.score, total_points);
        app.quizzes.record_result(result).unwrap();

        // Solve a puzzle on the second try with one hint.
        let puzzle = app
            .catalog()
            .puzzles()
            .iter()
            .find(|p| p.title() == "The Debt Elimination Strategy")
            .unwrap()
            .clone();
        app.puzzles.start(puzzle.id()).unwrap();
        app.puzzles.use_hint(puzzle.id()).unwrap();
        assert!(!app.puzzles.submit_answer(puzzle.id(), "pay them alphabetically").unwrap().correct);
        let outcome = app
            .puzzles
            .submit_answer(puzzle.id(), "avalanche: extra toward the highest interest rate debt")
            .unwrap();
        // 60 base - 10 for the hint - 5 for the failed attempt.
        assert_eq!(outcome.score, Some(45));

        // Read and bookmark a tip.
        let tip_id = app.catalog().tips()[0].id();
        app.tips.mark_read(tip_id).unwrap();
        app.tips.toggle_bookmark(tip_id).unwrap();

        let stats = app.user_stats();
        assert_eq!(stats.quizzes.completed, 1);
        assert_eq!(stats.puzzles.completed, 1);
        assert_eq!(stats.tips.read, 1);
        assert!(stats.overall_engagement() > 0.0);

        let events = app.drain_events();
        assert!(events.iter().any(|e| matches!(e, ProgressEvent::QuizCompleted { .. })));
        assert!(events.iter().any(|e| matches!(e, ProgressEvent::PuzzleSolved { .. })));
        assert!(events.iter().any(|e| matches!(e, ProgressEvent::TipRead { .. })));
    }

    // Everything comes back after a restart.
    let mut app = app_on(dir.path(), clock);
    let stats = app.user_stats();
    assert_eq!(stats.quizzes.completed, 1);
    assert_eq!(stats.puzzles.completed, 1);
    assert_eq!(stats.tips.read, 1);
    assert_eq!(stats.tips.bookmarked, 1);

    // The export covers every collection.
    let json = app.settings.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["completed_quizzes"].as_array().unwrap().len(), 1);
    assert_eq!(value["completed_puzzles"].as_array().unwrap().len(), 1);
    assert_eq!(value["bookmarked_tips"].as_array().unwrap().len(), 1);

    // A factory reset wipes disk and memory alike.
    app.reset_all().unwrap();
    let stats = app.user_stats();
    assert_eq!(stats.quizzes.completed, 0);
    assert_eq!(stats.puzzles.completed, 0);
    assert_eq!(stats.tips.read, 0);

    let app = app_on(dir.path(), clock);
    assert_eq!(app.user_stats().quizzes.completed, 0);
}
