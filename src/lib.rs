//! Hangman: guess a word letter by letter before the gallows is complete.
//!
//! The rules live in [`hangman_core`]; this crate wires them to a word
//! catalogue, a statistics file and a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML word catalogue and difficulty levels
//! - **Storage**: word selection and persisted player statistics
//! - **UI**: the presentation contract and its terminal implementation
//! - **Session**: the game service driving one game at a time
//! - **Commands**: one-shot catalogue queries and guess evaluation
//!
//! # Example
//!
//! ```no_run
//! use hangman::{ConsoleUi, FileStorage, GameConfig, GameService};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::embedded()?;
//! let storage = FileStorage::new(config, "player_statistics.json");
//! let mut service = GameService::new(storage, ConsoleUi::stdio());
//! let summary = service.run_session(Some("животные"), None)?;
//! println!("{}", summary.score());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod commands;
mod config;
mod error;
mod session;
mod storage;
mod ui;

// Crate-level exports - Command line
pub use cli::{Cli, Mode};

// Crate-level exports - One-shot commands
pub use commands::{check_word, evaluate, list_categories, list_levels, list_words, show_hint};

// Crate-level exports - Configuration
pub use config::{Category, GameConfig, HINT_UNAVAILABLE, LevelBudget, pluralize_attempts};

// Crate-level exports - Errors
pub use error::{ConfigError, HangmanError, StorageError};

// Crate-level exports - Session orchestration
pub use session::{ActiveGame, GameService, GameSummary, generate_match_id};

// Crate-level exports - Storage
pub use storage::{DEFAULT_STATS_FILE, FileStorage, Storage};

// Crate-level exports - Presentation
pub use ui::{ConsoleUi, GALLOWS_STAGES, HINT_KEYWORD, MenuChoice, Presentation, gallows_stage};
