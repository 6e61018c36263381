//! The hidden word and its optional hint.

use crate::GameError;
use derive_getters::Getters;
use tracing::instrument;

/// Minimum number of letters in a playable word.
pub const MIN_WORD_LEN: usize = 2;

/// A validated word paired with a hint description.
///
/// Validation happens once, in [`WordEntry::new`]. There are no mutators, so a
/// constructed entry is always playable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct WordEntry {
    /// The word itself.
    value: String,
    /// Hint text, possibly empty.
    hint: String,
}

impl WordEntry {
    /// Creates a word entry.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWord`] if the word is empty, shorter than
    /// [`MIN_WORD_LEN`] letters, or contains anything but alphabetic characters.
    ///
    /// ```
    /// use hangman_core::WordEntry;
    ///
    /// let word = WordEntry::new("кот", "маленькое домашнее животное").unwrap();
    /// assert_eq!(word.len(), 3);
    /// assert!(WordEntry::new("кот1", "").is_err());
    /// ```
    #[instrument(skip(value, hint), fields(value = %value.as_ref()))]
    pub fn new(value: impl AsRef<str>, hint: impl Into<String>) -> Result<Self, GameError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(GameError::InvalidWord(
                "Слово не может быть пустым".to_string(),
            ));
        }
        if value.chars().count() < MIN_WORD_LEN {
            return Err(GameError::InvalidWord(format!(
                "Слово должно содержать минимум {MIN_WORD_LEN} символа"
            )));
        }
        if !value.chars().all(char::is_alphabetic) {
            return Err(GameError::InvalidWord(
                "Слово должно содержать только буквы".to_string(),
            ));
        }

        Ok(Self {
            value: value.to_string(),
            hint: hint.into(),
        })
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Always false; a valid word has at least [`MIN_WORD_LEN`] letters.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns true if the (lowercase) letter occurs anywhere in the word.
    pub fn contains_letter(&self, letter: char) -> bool {
        self.value.chars().any(|c| fold_case(c) == letter)
    }

    /// The word with every letter lowercased.
    pub fn lowercase(&self) -> String {
        self.value.chars().map(fold_case).collect()
    }
}

impl std::fmt::Display for WordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Lowercases a single character, keeping it unchanged when the lowercase form
/// is not a single character.
pub(crate) fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
