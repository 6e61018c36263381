//! One-shot commands that print catalogue information or evaluate guesses.
//!
//! Each command returns the text to print so the binary stays a thin shell.

use crate::{GameConfig, HangmanError, pluralize_attempts};
use hangman_core::{Evaluation, WordEntry};
use tracing::instrument;

/// Lists categories in declared order.
pub fn list_categories(config: &GameConfig) -> String {
    let mut out = String::from("Доступные категории:");
    let names = config.category_names();
    if names.is_empty() {
        out.push_str("\n  (нет категорий)");
    }
    for name in names {
        out.push_str(&format!("\n  - {name}"));
    }
    out
}

/// Lists levels with their attempt budgets.
pub fn list_levels(config: &GameConfig) -> String {
    let mut out = String::from("Уровни сложности:");
    if config.levels().is_empty() {
        out.push_str("\n  (нет уровней)");
    }
    for level in config.levels() {
        out.push_str(&format!(
            "\n  - {} ({})",
            level.name(),
            pluralize_attempts(*level.attempts())
        ));
    }
    out
}

/// Lists the words of a category, one line per level.
///
/// # Errors
///
/// [`HangmanError::InvalidInput`] for a blank name,
/// [`HangmanError::CategoryNotFound`] for an unknown one.
#[instrument(skip(config))]
pub fn list_words(config: &GameConfig, category: &str) -> Result<String, HangmanError> {
    let category = require(category, "Категория не может быть пустой")?;
    let mut out = format!("Слова в категории '{category}':");
    for (level, words) in config.words_by_category(category)? {
        let listed = if words.is_empty() {
            "(нет слов)".to_string()
        } else {
            words
                .iter()
                .map(|w| w.value().as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!("\n  {level}: {listed}"));
    }
    Ok(out)
}

/// Shows the catalogue hint for a word.
///
/// # Errors
///
/// [`HangmanError::InvalidInput`] for a blank word.
#[instrument(skip(config))]
pub fn show_hint(config: &GameConfig, word: &str) -> Result<String, HangmanError> {
    let word = require(word, "Требуется слово для подсказки")?;
    let hint = config.hint_for(word);
    Ok(format!("Подсказка для слова '{word}': {hint}"))
}

/// Reports which category and level contain a word.
///
/// # Errors
///
/// [`HangmanError::InvalidInput`] for a blank word,
/// [`HangmanError::WordNotFound`] if the catalogue lacks it.
#[instrument(skip(config))]
pub fn check_word(config: &GameConfig, word: &str) -> Result<String, HangmanError> {
    let word = require(word, "Требуется слово для проверки")?;
    let (category, level) = config.locate_word(word)?;
    Ok(format!(
        "Слово '{word}' найдено: категория '{category}', уровень '{level}'"
    ))
}

/// Evaluates a guess string against a word, producing `<mask>;<POS|NEG>`.
///
/// ```
/// use hangman::evaluate;
///
/// assert_eq!(evaluate("кот", "кто").unwrap(), "кот;POS");
/// assert_eq!(evaluate("кот", "ка").unwrap(), "к**;NEG");
/// ```
///
/// # Errors
///
/// [`HangmanError::InvalidInput`] for blank arguments, or
/// [`HangmanError::Game`] if the word is not a valid word.
#[instrument]
pub fn evaluate(word: &str, guesses: &str) -> Result<String, HangmanError> {
    if word.trim().is_empty() || guesses.trim().is_empty() {
        return Err(HangmanError::InvalidInput(
            "Слово и буквы не могут быть пустыми".to_string(),
        ));
    }
    let entry = WordEntry::new(word.trim(), "")?;
    Ok(Evaluation::new(&entry, guesses).to_string())
}

fn require<'a>(value: &'a str, message: &str) -> Result<&'a str, HangmanError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(HangmanError::InvalidInput(message.to_string()))
    } else {
        Ok(trimmed)
    }
}
