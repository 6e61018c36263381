//! Pure hangman game logic.
//!
//! No I/O lives here: the crate only knows about words, guesses, scores and
//! achievements. Storage, terminal output and the session loop belong to the
//! `hangman` application crate.
//!
//! # Example
//!
//! ```
//! use hangman_core::{GameEngine, GameStatus, WordEntry, score_session};
//!
//! let word = WordEntry::new("кот", "маленькое домашнее животное").unwrap();
//! let mut game = GameEngine::new(word, 7).unwrap();
//! for letter in ["к", "о", "т"] {
//!     game.guess(letter).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(score_session(&game.state()), 80);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod achievements;
mod engine;
mod error;
mod evaluation;
mod scoring;
mod statistics;
mod word;

pub use achievements::{
    ACHIEVEMENT_RULES, Achievement, AchievementContext, AchievementRule, FinishedGame, WinStreak,
    evaluate_achievements,
};
pub use engine::{GameEngine, GameSession, GameStatus, GuessOutcome, MASK_PLACEHOLDER};
pub use error::GameError;
pub use evaluation::Evaluation;
pub use scoring::{
    ERROR_PENALTY, HINT_PENALTY, PERFECT_BONUS, POINTS_PER_LETTER, score, score_session,
};
pub use statistics::{MatchRecord, MatchResult, PlayerStatistics};
pub use word::{MIN_WORD_LEN, WordEntry};
