use std::fs;

use lane_dodger::engine::{FileHighscoreStore, HighscoreStore, StoreError};

#[test]
fn saved_score_survives_a_new_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");

    FileHighscoreStore::new(&path).save(31).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "31\n");
    assert_eq!(FileHighscoreStore::new(&path).load().unwrap(), 31);
}

#[test]
fn save_overwrites_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileHighscoreStore::new(dir.path().join("hs"));
    store.save(100).unwrap();
    store.save(7).unwrap();
    assert_eq!(store.load().unwrap(), 7);
}

#[test]
fn leading_token_is_used_and_rest_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hs");
    fs::write(&path, "  42 trailing words\n99\n").unwrap();
    assert_eq!(FileHighscoreStore::new(&path).load().unwrap(), 42);
}

#[test]
fn garbage_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hs");
    fs::write(&path, "not-a-number").unwrap();

    let err = FileHighscoreStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
    assert!(err.to_string().contains("not-a-number"));
}

#[test]
fn unwritable_location_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be written as a file.
    let mut store = FileHighscoreStore::new(dir.path());
    let err = store.save(5).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
