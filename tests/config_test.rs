//! Tests for TOML configuration loading.

use std::io::Write;

use tempfile::NamedTempFile;

use strictly_arithmetic::QuizConfig;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Write failed");
    file
}

#[test]
fn test_defaults() {
    let config = QuizConfig::default();
    assert_eq!(config.db_path(), "strictly_arithmetic.db");
    assert_eq!(config.log_file(), "strictly_arithmetic.log");
    assert_eq!(config.store_key(), "bestScore");
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("db_path = \"/tmp/quiz.db\"\n");
    let config = QuizConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.db_path(), "/tmp/quiz.db");
    assert_eq!(config.store_key(), "bestScore");
}

#[test]
fn test_full_file() {
    let file = write_config(
        "db_path = \"a.db\"\nlog_file = \"a.log\"\nstore_key = \"high\"\n",
    );
    let config = QuizConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.db_path(), "a.db");
    assert_eq!(config.log_file(), "a.log");
    assert_eq!(config.store_key(), "high");
}

#[test]
fn test_invalid_toml_is_error() {
    let file = write_config("db_path = [unterminated");
    let err = QuizConfig::from_file(file.path()).expect_err("Should fail");
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = QuizConfig::load_or_default("/definitely/not/here.toml").expect("Defaults");
    assert_eq!(config, QuizConfig::default());
}

#[test]
fn test_missing_file_is_error_for_from_file() {
    assert!(QuizConfig::from_file("/definitely/not/here.toml").is_err());
}

#[test]
fn test_db_path_override() {
    let config = QuizConfig::default().with_db_path("other.db".to_string());
    assert_eq!(config.db_path(), "other.db");
    assert_eq!(config.store_key(), "bestScore");
}
