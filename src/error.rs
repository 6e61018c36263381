//! Application error types.

use derive_more::{Display, Error, From};
use hangman_core::GameError;
use tracing::instrument;

/// Persistence failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Ошибка хранилища: {} at {}:{}", message, file, line)]
pub struct StorageError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StorageError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Ошибка конфигурации: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Every error a game session or CLI command can end with.
#[derive(Debug, Clone, Display, Error, From)]
pub enum HangmanError {
    /// Rejected by the game engine or word validation.
    #[display("{}", _0)]
    #[from]
    Game(#[error(source)] GameError),

    /// Unknown category.
    #[display("Категория '{}' не найдена", _0)]
    CategoryNotFound(#[error(not(source))] String),

    /// Unknown difficulty level.
    #[display("Уровень '{}' не найден", _0)]
    LevelNotFound(#[error(not(source))] String),

    /// The category/level pair has no words.
    #[display("Нет слов для категории '{}' и уровня '{}'", category, level)]
    NoWords {
        /// Requested category.
        category: String,
        /// Requested level.
        level: String,
    },

    /// The word is not in the catalogue.
    #[display("Слово '{}' отсутствует в базе", _0)]
    WordNotFound(#[error(not(source))] String),

    /// Malformed player or command-line input.
    #[display("{}", _0)]
    InvalidInput(#[error(not(source))] String),

    /// Input ended before the game finished.
    #[display("Игра прервана")]
    Interrupted,

    /// Statistics could not be read or written.
    #[display("{}", _0)]
    #[from]
    Storage(#[error(source)] StorageError),

    /// The word catalogue is invalid.
    #[display("{}", _0)]
    #[from]
    Config(#[error(source)] ConfigError),
}

impl From<std::io::Error> for StorageError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StorageError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}
