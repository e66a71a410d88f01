//! Tests for configuration and seed loading from files

use std::fs;

use tempfile::TempDir;
use trivia::adapters::{MemoryStore, SeedData, SeedError};
use trivia::config::{ConfigError, ServerConfig};
use trivia::core::ports::TriviaStore;

#[test]
fn test_load_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "host = \"0.0.0.0\"\nport = 8080\nworkers = 2\n").unwrap();

    let config = ServerConfig::load(&path).unwrap();
    assert_eq!(config.addr(), "0.0.0.0:8080");
    assert_eq!(config.workers, 2);
    assert_eq!(config.page_size, 10);
}

#[test]
fn test_resolve_explicit_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trivia.toml");
    fs::write(&path, "page_size = 5\n").unwrap();

    let config = ServerConfig::resolve(Some(&path)).unwrap();
    assert_eq!(config.page_size, 5);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = ServerConfig::load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_zero_workers_rejected() {
    let err = ServerConfig::parse("workers = 0").unwrap_err();
    assert!(err.to_string().contains("workers"));
}

#[test]
fn test_unknown_type_is_parse_error() {
    let err = ServerConfig::parse("port = \"eighty\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_seed_into_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seed.toml");
    fs::write(
        &path,
        r#"
[[categories]]
id = 1
type = "Science"

[[categories]]
id = 2
type = "Art"

[[questions]]
id = 7
question = "Who discovered penicillin?"
answer = "Alexander Fleming"
category = 1
difficulty = 3
"#,
    )
    .unwrap();

    let store = MemoryStore::from_seed(SeedData::load(&path).unwrap()).unwrap();
    assert_eq!(store.categories().unwrap().len(), 2);
    assert_eq!(store.question(7).unwrap().unwrap().answer, "Alexander Fleming");
}

#[test]
fn test_duplicate_question_ids_rejected() {
    let err = SeedData::parse(
        r#"
[[questions]]
id = 1
question = "Q"
answer = "A"
category = 1
difficulty = 1

[[questions]]
id = 1
question = "Q again"
answer = "A"
category = 1
difficulty = 1
"#,
    )
    .unwrap_err();
    assert!(matches!(err, SeedError::DuplicateQuestion(1)));
}

#[test]
fn test_bundled_seed_file_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/seed.toml");
    let seed = SeedData::load(&path).unwrap();
    assert_eq!(seed.categories.len(), 6);
    assert!(!seed.questions.is_empty());
    assert!(
        seed.questions
            .iter()
            .all(|q| seed.categories.iter().any(|c| c.id == q.category))
    );
}
