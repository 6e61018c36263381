//! Hangman state machine.
//!
//! A game starts `Active` and ends `Won` or `Lost`. All mutation goes through
//! [`GameEngine::guess`] and [`GameEngine::get_hint`]; the mask and the outcome
//! flags are always recomputed from the guessed letters, never cached.

use crate::word::fold_case;
use crate::{GameError, WordEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Character shown in place of letters that have not been guessed yet.
pub const MASK_PLACEHOLDER: char = '*';

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Guesses are still accepted.
    Active,
    /// Every letter of the word was revealed.
    Won,
    /// The attempt budget was exhausted.
    Lost,
}

impl GameStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Complete state of one game.
///
/// [`GameEngine::state`] hands out clones of this, so holding a session never
/// observes later guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    word: WordEntry,
    guessed_letters: BTreeSet<char>,
    errors: u32,
    max_attempts: u32,
    hint_used: bool,
    finished: bool,
}

impl GameSession {
    fn new(word: WordEntry, max_attempts: u32) -> Self {
        Self {
            word,
            guessed_letters: BTreeSet::new(),
            errors: 0,
            max_attempts,
            hint_used: false,
            finished: false,
        }
    }

    /// The hidden word.
    pub fn word(&self) -> &WordEntry {
        &self.word
    }

    /// Lowercase letters guessed so far.
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    /// Number of wrong guesses.
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Attempt budget fixed at creation.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether the hint was revealed.
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Whether the game reached a terminal state.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// The word with unguessed letters replaced by [`MASK_PLACEHOLDER`].
    pub fn mask(&self) -> String {
        self.word
            .value()
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&fold_case(c)) {
                    c
                } else {
                    MASK_PLACEHOLDER
                }
            })
            .collect()
    }

    /// True once the game is over and the whole word is revealed.
    pub fn is_won(&self) -> bool {
        self.finished && self.mask() == *self.word.value()
    }

    /// True once the game is over and the attempt budget is spent.
    pub fn is_lost(&self) -> bool {
        self.finished && self.errors >= self.max_attempts
    }

    /// Current phase.
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// Wrong guesses still allowed.
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.errors)
    }

    /// Guessed letters that are not in the word.
    pub fn wrong_letters(&self) -> BTreeSet<char> {
        self.guessed_letters
            .iter()
            .copied()
            .filter(|&letter| !self.word.contains_letter(letter))
            .collect()
    }
}

/// Snapshot returned by a successful guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    mask: String,
    correct: bool,
    won: bool,
    lost: bool,
    errors: u32,
    guessed_letters: BTreeSet<char>,
}

impl GuessOutcome {
    /// Mask after the guess.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Whether this guess hit a letter of the word.
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Whether this guess won the game.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Whether this guess lost the game.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Error count after the guess.
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Copy of the guessed letters after the guess.
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }
}

/// Hangman game engine owning a single [`GameSession`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    session: GameSession,
}

impl GameEngine {
    /// Starts a game for `word` allowing `max_attempts` wrong guesses.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAttempts`] if `max_attempts` is zero.
    #[instrument(fields(word_len = word.len()), skip(word))]
    pub fn new(word: WordEntry, max_attempts: u32) -> Result<Self, GameError> {
        if max_attempts < 1 {
            return Err(GameError::InvalidAttempts(max_attempts));
        }
        debug!(max_attempts, "Starting new game");
        Ok(Self {
            session: GameSession::new(word, max_attempts),
        })
    }

    /// Guesses one letter.
    ///
    /// The input is case-insensitive. A wrong letter costs one attempt.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyFinished`] once the game is won or lost
    /// - [`GameError::InvalidGuessFormat`] unless the input is exactly one alphabetic character
    /// - [`GameError::DuplicateGuess`] if the letter was already guessed
    #[instrument(skip(self), fields(errors = self.session.errors))]
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        if self.session.finished {
            return Err(GameError::GameAlreadyFinished);
        }

        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => fold_case(c),
            _ => return Err(GameError::InvalidGuessFormat(input.to_string())),
        };

        if !self.session.guessed_letters.insert(letter) {
            return Err(GameError::DuplicateGuess(letter));
        }

        let correct = self.session.word.contains_letter(letter);
        if !correct {
            self.session.errors += 1;
        }

        let mask = self.session.mask();
        if mask == *self.session.word.value() || self.session.errors >= self.session.max_attempts {
            self.session.finished = true;
            info!(
                status = %self.session.status(),
                errors = self.session.errors,
                "Game finished"
            );
        }

        debug!(%letter, correct, %mask, "Guess applied");

        Ok(GuessOutcome {
            mask,
            correct,
            won: self.session.is_won(),
            lost: self.session.is_lost(),
            errors: self.session.errors,
            guessed_letters: self.session.guessed_letters.clone(),
        })
    }

    /// Reveals the hint. Allowed once per game and does not cost an attempt.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyFinished`] once the game is won or lost
    /// - [`GameError::HintAlreadyUsed`] on every call after the first
    #[instrument(skip(self))]
    pub fn get_hint(&mut self) -> Result<String, GameError> {
        if self.session.finished {
            return Err(GameError::GameAlreadyFinished);
        }
        if self.session.hint_used {
            return Err(GameError::HintAlreadyUsed);
        }
        self.session.hint_used = true;
        debug!("Hint revealed");
        Ok(self.session.word.hint().clone())
    }

    /// Returns a copy of the current session.
    pub fn state(&self) -> GameSession {
        self.session.clone()
    }

    /// Current phase without copying the session.
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }
}
