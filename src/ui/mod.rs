//! Player-facing presentation.

mod console;
mod stages;

pub use console::{ConsoleUi, MenuChoice};
pub use stages::{GALLOWS_STAGES, gallows_stage};

use crate::{HangmanError, LevelBudget};
use hangman_core::GameSession;
use std::collections::BTreeSet;

/// Input token that requests the hint instead of guessing a letter.
pub const HINT_KEYWORD: &str = "hint";

/// Presentation consumed by the game session.
pub trait Presentation {
    /// Draws the current game.
    fn render_state(
        &mut self,
        session: &GameSession,
        category: &str,
        level: &str,
        wrong_letters: &BTreeSet<char>,
    );

    /// Reads one input token: a single letter or [`HINT_KEYWORD`].
    ///
    /// # Errors
    ///
    /// [`HangmanError::InvalidInput`] for malformed input,
    /// [`HangmanError::Interrupted`] when input ends.
    fn prompt_input(&mut self) -> Result<String, HangmanError>;

    /// Lets the player pick a category.
    ///
    /// # Errors
    ///
    /// [`HangmanError::InvalidInput`] if there is nothing to choose from,
    /// [`HangmanError::Interrupted`] when input ends.
    fn prompt_category_choice(&mut self, categories: &[String]) -> Result<String, HangmanError>;

    /// Lets the player pick a difficulty level.
    ///
    /// # Errors
    ///
    /// [`HangmanError::InvalidInput`] if there is nothing to choose from,
    /// [`HangmanError::Interrupted`] when input ends.
    fn prompt_level_choice(&mut self, levels: &[LevelBudget]) -> Result<String, HangmanError>;

    /// Shows a message, highlighted when `is_error`.
    fn show_message(&mut self, text: &str, is_error: bool);

    /// Drops messages still waiting for a board. Called before a new game
    /// starts.
    fn clear_messages(&mut self) {}
}
