use std::collections::BTreeSet;

use quizfi_core::model::{QuizId, QuizResult, TipId, UserPreferences};
use quizfi_core::time::fixed_now;
use storage::{JsonFileStore, ProgressStore, SnapshotStore, StoreKey};

fn sample_result() -> QuizResult {
    QuizResult {
        quiz_id: QuizId::new(),
        quiz_title: "Budgeting Basics".into(),
        score: 25,
        total_points: 35,
        completion_secs: 140,
        correct_answers: 2,
        total_questions: 3,
        completed_at: fixed_now(),
    }
}

#[test]
fn snapshots_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.save_quiz_results(&[sample_result()]).unwrap();
        store.save_bookmarks(&BTreeSet::from([TipId::new()])).unwrap();
    }

    let reopened = JsonFileStore::open(dir.path()).unwrap();
    let results = reopened.load_quiz_results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].quiz_title, "Budgeting Basics");
    assert_eq!(reopened.load_bookmarks().len(), 1);
}

#[test]
fn corrupt_file_is_recovered_as_fresh_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();

    store.write_raw(StoreKey::Preferences, b"\xff\xfenot json").unwrap();
    assert_eq!(store.load_preferences(), UserPreferences::default());
}

#[test]
fn clear_all_leaves_an_empty_directory_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();

    store.save_quiz_results(&[sample_result()]).unwrap();
    store.save_preferences(&UserPreferences::default()).unwrap();
    store.clear_all().unwrap();

    assert!(store.load_quiz_results().is_empty());
    for key in StoreKey::ALL {
        assert!(store.read_raw(key).unwrap().is_none());
    }
}

#[test]
fn unknown_enum_values_fall_back_instead_of_failing_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();

    let mut doc = serde_json::to_value(UserPreferences::default()).unwrap();
    doc["preferred_difficulty"] = serde_json::Value::String("Legendary".into());
    store
        .write_raw(StoreKey::Preferences, serde_json::to_vec(&doc).unwrap().as_slice())
        .unwrap();

    let prefs = store.load_preferences();
    assert_eq!(prefs.preferred_difficulty, quizfi_core::model::Difficulty::Beginner);
}
