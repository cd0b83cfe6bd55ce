//! Tests for the SQLite best-score store.

use tempfile::NamedTempFile;

use strictly_arithmetic::{ScoreRepository, SqliteBestScore};
use strictly_quiz::{
    BestScoreStore, GameSession, MemoryBestScore, Problem, ProblemSource, ROUND_SECONDS,
    StoreError,
};

/// Opens a repository on a fresh temporary file. The file handle must stay in
/// scope to keep the database alive.
fn setup_test_db() -> (NamedTempFile, ScoreRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let repo = ScoreRepository::open(db_path).expect("Failed to open repository");
    (db_file, repo)
}

struct Fixed;

impl ProblemSource for Fixed {
    fn next_problem(&mut self) -> Problem {
        "8 * 9 =".parse().expect("Valid problem text")
    }
}

#[test]
fn test_missing_key_is_none() {
    let (_db, repo) = setup_test_db();
    assert!(repo.get_score("bestScore").expect("Query failed").is_none());
}

/// Loads fail, saves go to the database.
struct WriteOnly(SqliteBestScore);

impl BestScoreStore for WriteOnly {
    fn load(&self) -> Result<u32, StoreError> {
        Err(StoreError::new("read unavailable"))
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.0.save(score)
    }
}

#[test]
fn test_upsert_inserts_then_raises() {
    let (_db, repo) = setup_test_db();
    repo.upsert_score("bestScore", 3).expect("Insert failed");
    let row = repo.get_score("bestScore").expect("Query failed").expect("Row exists");
    assert_eq!(*row.score(), 3);
    assert_eq!(row.key(), "bestScore");

    repo.upsert_score("bestScore", 11).expect("Update failed");
    let row = repo.get_score("bestScore").expect("Query failed").expect("Row exists");
    assert_eq!(*row.score(), 11);
}

#[test]
fn test_upsert_never_lowers() {
    let (_db, repo) = setup_test_db();
    repo.upsert_score("bestScore", 50).expect("Insert failed");
    repo.upsert_score("bestScore", 1).expect("Update failed");

    let row = repo.get_score("bestScore").expect("Query failed").expect("Row exists");
    assert_eq!(*row.score(), 50);
}

#[test]
fn test_store_save_lower_keeps_best() {
    let (_db, repo) = setup_test_db();
    let mut store = SqliteBestScore::new(repo, "bestScore".to_string());
    store.save(50).expect("Save failed");
    store.save(1).expect("Save failed");
    assert_eq!(store.load().expect("Load failed"), 50);
}

#[test]
fn test_session_with_failed_load_keeps_stored_best() {
    let (_db, repo) = setup_test_db();
    repo.upsert_score("bestScore", 50).expect("Insert failed");

    let store = WriteOnly(SqliteBestScore::new(repo.clone(), "bestScore".to_string()));
    let mut session = GameSession::new(Fixed, store);
    assert_eq!(session.state().best_score(), 0);

    session.start();
    session.submit_input("72");
    for _ in 0..ROUND_SECONDS {
        session.tick();
    }
    assert_eq!(session.state().best_score(), 1);

    let fresh = SqliteBestScore::new(repo, "bestScore".to_string());
    assert_eq!(fresh.load().expect("Load failed"), 50);
}

#[test]
fn test_keys_are_independent() {
    let (_db, repo) = setup_test_db();
    repo.upsert_score("alice", 5).expect("Insert failed");
    repo.upsert_score("bob", 9).expect("Insert failed");

    assert_eq!(*repo.get_score("alice").unwrap().unwrap().score(), 5);
    assert_eq!(*repo.get_score("bob").unwrap().unwrap().score(), 9);
}

#[test]
fn test_reopen_keeps_data() {
    let (db, repo) = setup_test_db();
    repo.upsert_score("bestScore", 4).expect("Insert failed");

    let path = db.path().to_str().unwrap().to_string();
    let reopened = ScoreRepository::open(path).expect("Reopen failed");
    assert_eq!(*reopened.get_score("bestScore").unwrap().unwrap().score(), 4);
}

#[test]
fn test_store_empty_loads_zero() {
    let (_db, repo) = setup_test_db();
    let store = SqliteBestScore::new(repo, "bestScore".to_string());
    assert_eq!(store.load().expect("Load failed"), 0);
}

#[test]
fn test_store_save_then_load() {
    let (_db, repo) = setup_test_db();
    let mut store = SqliteBestScore::new(repo.clone(), "bestScore".to_string());
    store.save(17).expect("Save failed");

    let fresh = SqliteBestScore::new(repo, "bestScore".to_string());
    assert_eq!(fresh.load().expect("Load failed"), 17);
}

#[test]
fn test_store_rejects_negative_row() {
    let (_db, repo) = setup_test_db();
    repo.upsert_score("bestScore", -1).expect("Insert failed");
    let store = SqliteBestScore::new(repo, "bestScore".to_string());
    assert!(store.load().is_err());
}

#[test]
fn test_open_unreachable_path_fails() {
    let result = ScoreRepository::open("/nonexistent-dir/for/sure/scores.db".to_string());
    assert!(result.is_err());
}

#[test]
fn test_best_score_survives_sessions() {
    let (_db, repo) = setup_test_db();

    let store = SqliteBestScore::new(repo.clone(), "bestScore".to_string());
    let mut session = GameSession::new(Fixed, store);
    session.start();
    for _ in 0..7 {
        session.submit_input("72");
    }
    for _ in 0..ROUND_SECONDS {
        session.tick();
    }
    assert_eq!(session.state().best_score(), 7);

    let store = SqliteBestScore::new(repo, "bestScore".to_string());
    let session = GameSession::new(Fixed, store);
    assert_eq!(session.state().best_score(), 7);

    // A memory store starts from scratch, the database does not.
    let memory = GameSession::new(Fixed, MemoryBestScore::default());
    assert_eq!(memory.state().best_score(), 0);
}
