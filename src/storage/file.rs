//! File-backed storage: words from the catalogue, statistics as JSON.

use super::Storage;
use crate::{GameConfig, HangmanError, LevelBudget, StorageError};
use hangman_core::{PlayerStatistics, WordEntry};
use rand::prelude::IndexedRandom;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Statistics file used when no path is configured.
pub const DEFAULT_STATS_FILE: &str = "player_statistics.json";

/// Storage backed by a [`GameConfig`] and a JSON statistics file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    config: GameConfig,
    stats_path: PathBuf,
}

impl FileStorage {
    /// Creates storage over `config`, keeping statistics at `stats_path`.
    #[instrument(skip(config), fields(stats_path = %stats_path.as_ref().display()))]
    pub fn new(config: GameConfig, stats_path: impl AsRef<Path>) -> Self {
        debug!("Creating FileStorage");
        Self {
            config,
            stats_path: stats_path.as_ref().to_path_buf(),
        }
    }

    /// The word catalogue.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Location of the statistics file.
    pub fn stats_path(&self) -> &Path {
        &self.stats_path
    }
}

impl Storage for FileStorage {
    #[instrument(skip(self))]
    fn get_word(&self, category: &str, level: &str) -> Result<WordEntry, HangmanError> {
        let words = self.config.words(category, level)?;
        let word = words
            .choose(&mut rand::rng())
            .ok_or_else(|| HangmanError::NoWords {
                category: category.to_string(),
                level: level.to_string(),
            })?;
        debug!(pool = words.len(), "Word selected");
        Ok(word.clone())
    }

    fn get_categories(&self) -> Vec<String> {
        self.config.category_names()
    }

    fn get_level_attempts(&self) -> Vec<LevelBudget> {
        self.config.levels().clone()
    }

    #[instrument(skip(self), fields(path = %self.stats_path.display()))]
    fn load_statistics(&self) -> Result<PlayerStatistics, StorageError> {
        if !self.stats_path.exists() {
            info!("No saved statistics, starting fresh");
            let stats = PlayerStatistics::default();
            self.save_statistics(&stats)?;
            return Ok(stats);
        }

        let content = std::fs::read_to_string(&self.stats_path).map_err(|e| {
            warn!(error = %e, "Failed to read statistics");
            StorageError::new(format!(
                "Ошибка чтения статистики из '{}': {}",
                self.stats_path.display(),
                e
            ))
        })?;

        let stats: PlayerStatistics = serde_json::from_str(&content).map_err(|e| {
            warn!(error = %e, "Malformed statistics file");
            StorageError::new(format!(
                "Ошибка чтения статистики из '{}': {}",
                self.stats_path.display(),
                e
            ))
        })?;

        debug!(games_played = *stats.games_played(), "Statistics loaded");
        Ok(stats)
    }

    #[instrument(skip(self, stats), fields(path = %self.stats_path.display()))]
    fn save_statistics(&self, stats: &PlayerStatistics) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(stats)?;
        std::fs::write(&self.stats_path, json).map_err(|e| {
            warn!(error = %e, "Failed to write statistics");
            StorageError::new(format!(
                "Ошибка записи статистики в '{}': {}",
                self.stats_path.display(),
                e
            ))
        })?;
        debug!(games_played = *stats.games_played(), "Statistics saved");
        Ok(())
    }
}
