//! Word selection and statistics persistence.

mod file;

pub use file::{DEFAULT_STATS_FILE, FileStorage};

use crate::{HangmanError, LevelBudget, StorageError};
use hangman_core::{PlayerStatistics, WordEntry};

/// Storage consumed by the game session.
///
/// The session only depends on this trait; tests swap in in-memory fakes.
pub trait Storage {
    /// Picks a random word for a category and level.
    ///
    /// # Errors
    ///
    /// [`HangmanError::CategoryNotFound`] or [`HangmanError::LevelNotFound`]
    /// for unknown keys, [`HangmanError::NoWords`] for an empty pool.
    fn get_word(&self, category: &str, level: &str) -> Result<WordEntry, HangmanError>;

    /// Category names in display order.
    fn get_categories(&self) -> Vec<String>;

    /// Levels with their attempt budgets, in display order.
    fn get_level_attempts(&self) -> Vec<LevelBudget>;

    /// Loads the player's statistics, zeroed if none were saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if saved statistics cannot be read.
    fn load_statistics(&self) -> Result<PlayerStatistics, StorageError>;

    /// Overwrites the saved statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on write failure.
    fn save_statistics(&self, stats: &PlayerStatistics) -> Result<(), StorageError>;
}
