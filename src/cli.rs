//! Command-line interface for hangman.

use crate::storage::DEFAULT_STATS_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Игра Виселица - угадай слово по буквам!
#[derive(Parser, Debug, Clone)]
#[command(name = "hangman")]
#[command(about = "Игра Виселица - угадай слово по буквам!", long_about = None)]
#[command(version = concat!("Виселица v", env!("CARGO_PKG_VERSION")))]
pub struct Cli {
    /// Слово для неинтерактивной проверки
    pub word: Option<String>,

    /// Буквы, которыми угадывают слово
    pub guesses: Option<String>,

    /// Показать доступные категории
    #[arg(long)]
    pub categories: bool,

    /// Показать уровни сложности
    #[arg(long)]
    pub levels: bool,

    /// Показать слова категории
    #[arg(long, value_name = "CATEGORY")]
    pub words: Option<String>,

    /// Показать подсказку для слова
    #[arg(long, value_name = "WORD")]
    pub hint: Option<String>,

    /// Найти категорию и уровень слова
    #[arg(long, value_name = "WORD")]
    pub check: Option<String>,

    /// Предустановленная категория для интерактивной игры
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Предустановленный уровень для интерактивной игры
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<String>,

    /// Показать статистику игрока
    #[arg(long)]
    pub stats: bool,

    /// Файл с каталогом слов (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Файл статистики игрока
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STATS_FILE)]
    pub stats_file: PathBuf,
}

/// What the binary should do for a parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print player statistics.
    Statistics,
    /// Evaluate a word against guesses.
    Evaluate {
        /// Target word.
        word: String,
        /// Attempted letters.
        guesses: String,
    },
    /// List categories.
    Categories,
    /// List levels.
    Levels,
    /// List words of a category.
    Words(String),
    /// Show a word's hint.
    Hint(String),
    /// Locate a word.
    Check(String),
    /// Positional arguments that cannot be evaluated.
    Incomplete,
    /// Interactive game with optional presets.
    Interactive {
        /// Preset category.
        category: Option<String>,
        /// Preset level.
        level: Option<String>,
    },
}

impl Cli {
    /// Resolves the mode, with statistics first and one-shot commands next.
    pub fn mode(&self) -> Mode {
        if self.stats {
            return Mode::Statistics;
        }
        match (&self.word, &self.guesses) {
            (Some(word), Some(guesses)) => {
                return Mode::Evaluate {
                    word: word.clone(),
                    guesses: guesses.clone(),
                };
            }
            (Some(_), None) | (None, Some(_)) => return Mode::Incomplete,
            (None, None) => {}
        }
        if self.categories {
            Mode::Categories
        } else if self.levels {
            Mode::Levels
        } else if let Some(category) = &self.words {
            Mode::Words(category.clone())
        } else if let Some(word) = &self.hint {
            Mode::Hint(word.clone())
        } else if let Some(word) = &self.check {
            Mode::Check(word.clone())
        } else {
            Mode::Interactive {
                category: self.category.clone(),
                level: self.level.clone(),
            }
        }
    }
}
