//! Word catalogue and difficulty levels, loaded from TOML.

use crate::{ConfigError, HangmanError};
use derive_getters::Getters;
use derive_new::new;
use hangman_core::WordEntry;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Catalogue compiled into the binary.
const EMBEDDED_CATALOGUE: &str = include_str!("../assets/words.toml");

/// Hint text when a word has none in the catalogue.
pub const HINT_UNAVAILABLE: &str = "Подсказка недоступна";

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    levels: Vec<RawLevel>,
    #[serde(default)]
    categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawLevel {
    name: String,
    attempts: u32,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
    #[serde(default)]
    words: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    level: String,
    value: String,
    #[serde(default)]
    hint: String,
}

/// A difficulty level and its attempt budget.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct LevelBudget {
    /// Level name.
    name: String,
    /// Wrong guesses allowed.
    attempts: u32,
    /// Optional short description.
    description: Option<String>,
}

impl LevelBudget {
    /// Label shown next to the level name, e.g. `(7 попыток)`.
    pub fn label(&self) -> String {
        match &self.description {
            Some(description) => {
                format!("({}, {})", pluralize_attempts(self.attempts), description)
            }
            None => format!("({})", pluralize_attempts(self.attempts)),
        }
    }
}

/// A named group of words, bucketed by level.
#[derive(Debug, Clone, Getters)]
pub struct Category {
    name: String,
    words: BTreeMap<String, Vec<WordEntry>>,
}

/// Validated word catalogue.
#[derive(Debug, Clone, Getters)]
pub struct GameConfig {
    /// Levels in menu order.
    levels: Vec<LevelBudget>,
    /// Categories in declaration order.
    categories: Vec<Category>,
}

impl GameConfig {
    /// Parses and validates a TOML catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML, duplicate level or category
    /// names, a zero attempt budget, a word referencing an undeclared level, or
    /// a word that fails validation.
    #[instrument(skip(source), fields(len = source.len()))]
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(source)?;

        let mut level_names = HashSet::new();
        let mut levels = Vec::with_capacity(raw.levels.len());
        for level in raw.levels {
            if level.attempts < 1 {
                return Err(ConfigError::new(format!(
                    "Level '{}' must allow at least one attempt",
                    level.name
                )));
            }
            if !level_names.insert(level.name.clone()) {
                return Err(ConfigError::new(format!(
                    "Duplicate level '{}'",
                    level.name
                )));
            }
            levels.push(LevelBudget::new(level.name, level.attempts, level.description));
        }

        let mut category_names = HashSet::new();
        let mut categories = Vec::with_capacity(raw.categories.len());
        for category in raw.categories {
            if !category_names.insert(category.name.clone()) {
                return Err(ConfigError::new(format!(
                    "Duplicate category '{}'",
                    category.name
                )));
            }

            let mut words: BTreeMap<String, Vec<WordEntry>> = BTreeMap::new();
            for word in category.words {
                if !level_names.contains(&word.level) {
                    return Err(ConfigError::new(format!(
                        "Word '{}' in category '{}' uses unknown level '{}'",
                        word.value, category.name, word.level
                    )));
                }
                let entry = WordEntry::new(&word.value, word.hint).map_err(|e| {
                    ConfigError::new(format!("Word '{}': {}", word.value, e))
                })?;
                words.entry(word.level).or_default().push(entry);
            }

            debug!(category = %category.name, levels = words.len(), "Category loaded");
            categories.push(Category {
                name: category.name,
                words,
            });
        }

        info!(
            levels = levels.len(),
            categories = categories.len(),
            "Word catalogue loaded"
        );
        Ok(Self { levels, categories })
    }

    /// Loads a catalogue from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    /// The catalogue shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if the embedded file is broken.
    #[instrument]
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(EMBEDDED_CATALOGUE)
    }

    /// Loads `path` when given, the embedded catalogue otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the selected catalogue is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::embedded(),
        }
    }

    /// Category names in declaration order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Attempt budget of a level.
    pub fn attempts_for_level(&self, level: &str) -> Option<u32> {
        self.levels
            .iter()
            .find(|l| l.name == level)
            .map(|l| l.attempts)
    }

    fn category(&self, name: &str) -> Result<&Category, HangmanError> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| HangmanError::CategoryNotFound(name.to_string()))
    }

    /// Words of one category and level.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::CategoryNotFound`] or
    /// [`HangmanError::LevelNotFound`] for unknown keys.
    pub fn words(&self, category: &str, level: &str) -> Result<&[WordEntry], HangmanError> {
        let category = self.category(category)?;
        if self.attempts_for_level(level).is_none() {
            return Err(HangmanError::LevelNotFound(level.to_string()));
        }
        Ok(category.words.get(level).map_or(&[][..], Vec::as_slice))
    }

    /// Words of a category grouped by level, in level order.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::CategoryNotFound`] for an unknown category.
    pub fn words_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<(&str, &[WordEntry])>, HangmanError> {
        let category = self.category(category)?;
        Ok(self
            .levels
            .iter()
            .map(|level| {
                let words = category.words.get(&level.name).map_or(&[][..], Vec::as_slice);
                (level.name.as_str(), words)
            })
            .collect())
    }

    fn find_word(&self, word: &str) -> Option<(&Category, &str, &WordEntry)> {
        let needle = word.to_lowercase();
        self.categories.iter().find_map(|category| {
            category.words.iter().find_map(|(level, entries)| {
                entries
                    .iter()
                    .find(|entry| entry.lowercase() == needle)
                    .map(|entry| (category, level.as_str(), entry))
            })
        })
    }

    /// Catalogue hint for a word, or [`HINT_UNAVAILABLE`].
    pub fn hint_for(&self, word: &str) -> String {
        self.find_word(word)
            .map(|(_, _, entry)| entry.hint().clone())
            .filter(|hint| !hint.is_empty())
            .unwrap_or_else(|| HINT_UNAVAILABLE.to_string())
    }

    /// Category and level that contain a word.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::WordNotFound`] if the word is not in the catalogue.
    pub fn locate_word(&self, word: &str) -> Result<(String, String), HangmanError> {
        self.find_word(word)
            .map(|(category, level, _)| (category.name.clone(), level.to_string()))
            .ok_or_else(|| HangmanError::WordNotFound(word.to_string()))
    }
}

/// Formats an attempt count with the matching Russian plural form.
///
/// ```
/// use hangman::pluralize_attempts;
///
/// assert_eq!(pluralize_attempts(1), "1 попытка");
/// assert_eq!(pluralize_attempts(3), "3 попытки");
/// assert_eq!(pluralize_attempts(7), "7 попыток");
/// ```
pub fn pluralize_attempts(count: u32) -> String {
    let form = match (count % 10, count % 100) {
        (_, 11..=14) => "попыток",
        (1, _) => "попытка",
        (2..=4, _) => "попытки",
        _ => "попыток",
    };
    format!("{count} {form}")
}
