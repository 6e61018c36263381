//! Tests for the file-backed storage.

use tempfile::TempDir;

use hangman::{FileStorage, GameConfig, HangmanError, Storage};
use hangman_core::{MatchRecord, MatchResult, PlayerStatistics};

const SMALL_CATALOGUE: &str = r#"
[[levels]]
name = "лёгкий"
attempts = 7

[[levels]]
name = "сложный"
attempts = 5

[[categories]]
name = "животные"

[[categories.words]]
level = "лёгкий"
value = "кот"
hint = "маленькое домашнее животное"
"#;

/// Creates storage over the small catalogue with statistics in a temp dir.
/// The directory handle must stay in scope to keep the files alive.
fn setup_storage() -> (TempDir, FileStorage) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::parse(SMALL_CATALOGUE).expect("Catalogue should parse");
    let storage = FileStorage::new(config, dir.path().join("stats.json"));
    (dir, storage)
}

#[test]
fn test_get_word_from_pool() {
    let (_dir, storage) = setup_storage();
    let word = storage.get_word("животные", "лёгкий").expect("Word expected");
    assert_eq!(word.value(), "кот");
    assert_eq!(word.hint(), "маленькое домашнее животное");
}

#[test]
fn test_get_word_empty_pool_fails() {
    let (_dir, storage) = setup_storage();
    let result = storage.get_word("животные", "сложный");
    assert!(matches!(result, Err(HangmanError::NoWords { .. })));
}

#[test]
fn test_get_word_unknown_keys_fail() {
    let (_dir, storage) = setup_storage();
    assert!(matches!(
        storage.get_word("птицы", "лёгкий"),
        Err(HangmanError::CategoryNotFound(_))
    ));
    assert!(matches!(
        storage.get_word("животные", "адский"),
        Err(HangmanError::LevelNotFound(_))
    ));
}

#[test]
fn test_categories_and_levels_in_declared_order() {
    let (_dir, storage) = setup_storage();
    assert_eq!(storage.get_categories(), vec!["животные".to_string()]);

    let levels = storage.get_level_attempts();
    let summary: Vec<(&str, u32)> = levels
        .iter()
        .map(|l| (l.name().as_str(), *l.attempts()))
        .collect();
    assert_eq!(summary, vec![("лёгкий", 7), ("сложный", 5)]);
}

#[test]
fn test_missing_statistics_file_is_created() {
    let (_dir, storage) = setup_storage();
    assert!(!storage.stats_path().exists());

    let stats = storage.load_statistics().expect("Load failed");
    assert_eq!(stats, PlayerStatistics::default());
    assert!(storage.stats_path().exists(), "Defaults should be written back");
}

#[test]
fn test_statistics_round_trip() {
    let (_dir, storage) = setup_storage();
    let mut stats = PlayerStatistics::default();
    stats.unlock("Новичок");
    stats.record_match(MatchRecord::new(
        "123456789".to_string(),
        80,
        false,
        0,
        MatchResult::Win,
    ));

    storage.save_statistics(&stats).expect("Save failed");
    let loaded = storage.load_statistics().expect("Load failed");
    assert_eq!(loaded, stats);
    assert_eq!(*loaded.wins(), 1);
    assert_eq!(*loaded.total_score(), 80);
}

#[test]
fn test_statistics_file_uses_wire_field_names() {
    let (_dir, storage) = setup_storage();
    let mut stats = PlayerStatistics::default();
    stats.record_match(MatchRecord::new(
        "987654321".to_string(),
        0,
        true,
        5,
        MatchResult::Loss,
    ));
    storage.save_statistics(&stats).expect("Save failed");

    let raw = std::fs::read_to_string(storage.stats_path()).expect("Read failed");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("Invalid JSON");
    assert_eq!(json["games_played"], 1);
    assert_eq!(json["wins"], 0);
    assert_eq!(json["total_score"], 0);
    assert!(json["unlocked_achievements"].is_array());
    assert_eq!(json["match_history"][0]["match_id"], "987654321");
    assert_eq!(json["match_history"][0]["hint_used"], true);
    assert_eq!(json["match_history"][0]["errors"], 5);
    assert_eq!(json["match_history"][0]["result"], "loss");
}

#[test]
fn test_corrupt_statistics_file_fails() {
    let (_dir, storage) = setup_storage();
    std::fs::write(storage.stats_path(), "{not json").expect("Write failed");

    let result = storage.load_statistics();
    assert!(result.is_err(), "Malformed file should be a storage error");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::parse(SMALL_CATALOGUE).expect("Catalogue should parse");
    let storage = FileStorage::new(config, dir.path().join("absent").join("stats.json"));

    let result = storage.save_statistics(&PlayerStatistics::default());
    assert!(result.is_err());
}
