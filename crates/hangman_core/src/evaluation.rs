//! One-shot evaluation of a word against a set of letters.

use crate::engine::MASK_PLACEHOLDER;
use crate::word::fold_case;
use crate::WordEntry;
use std::collections::BTreeSet;
use tracing::instrument;

/// Result of checking a word against a string of attempted letters.
///
/// Formats as `<mask>;POS` when every letter of the word was attempted and
/// `<mask>;NEG` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    mask: String,
    solved: bool,
}

impl Evaluation {
    /// Evaluates `word` against `guesses`.
    ///
    /// The guesses form an unordered set: case, duplicates and
    /// non-alphabetic characters are ignored. Every occurrence of a guessed
    /// letter is revealed.
    ///
    /// ```
    /// use hangman_core::{Evaluation, WordEntry};
    ///
    /// let word = WordEntry::new("кот", "").unwrap();
    /// assert_eq!(Evaluation::new(&word, "ткко").to_string(), "кот;POS");
    /// assert_eq!(Evaluation::new(&word, "абв").to_string(), "***;NEG");
    /// ```
    #[instrument(skip(word), fields(word_len = word.len()))]
    pub fn new(word: &WordEntry, guesses: &str) -> Self {
        let letters: BTreeSet<char> = guesses
            .chars()
            .filter(|c| c.is_alphabetic())
            .map(fold_case)
            .collect();

        let lowered = word.lowercase();
        let mask: String = lowered
            .chars()
            .map(|c| {
                if letters.contains(&c) {
                    c
                } else {
                    MASK_PLACEHOLDER
                }
            })
            .collect();
        let solved = mask == lowered;

        Self { mask, solved }
    }

    /// The revealed word.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Whether every letter of the word was guessed.
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.solved { "POS" } else { "NEG" };
        write!(f, "{};{}", self.mask, verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(word: &str, guesses: &str) -> String {
        Evaluation::new(&WordEntry::new(word, "").unwrap(), guesses).to_string()
    }

    #[test]
    fn test_win() {
        assert_eq!(eval("кот", "кот"), "кот;POS");
    }

    #[test]
    fn test_loss() {
        assert_eq!(eval("кот", "абвгдеё"), "***;NEG");
    }

    #[test]
    fn test_duplicates_ignored() {
        assert_eq!(eval("кот", "кккот"), "кот;POS");
    }

    #[test]
    fn test_non_alphabetic_ignored() {
        assert_eq!(eval("кот", "к11от"), "кот;POS");
        assert_eq!(eval("кот", "к о т"), "кот;POS");
    }

    #[test]
    fn test_empty_guesses() {
        assert_eq!(eval("кот", ""), "***;NEG");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(eval("Кот", "КОТ"), "кот;POS");
    }

    #[test]
    fn test_all_occurrences_revealed() {
        assert_eq!(eval("волокно", "о"), "*о*о**о;NEG");
        assert_eq!(eval("волокно", "барахло"), "*оло**о;NEG");
    }
}
