//! Drives one game from category selection to persisted statistics.

use crate::storage::Storage;
use crate::ui::{HINT_KEYWORD, Presentation};
use crate::HangmanError;
use derive_getters::Getters;
use hangman_core::{
    Achievement, FinishedGame, GameEngine, GameError, MatchRecord, MatchResult, WinStreak,
    evaluate_achievements, score_session,
};
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, warn};

/// Number of digits in a match identifier.
const MATCH_ID_DIGITS: usize = 9;

/// Generates a match identifier: nine distinct decimal digits.
///
/// Identifiers are for human reference only; collisions are not checked.
pub fn generate_match_id() -> String {
    let mut digits: Vec<char> = ('0'..='9').collect();
    digits.shuffle(&mut rand::rng());
    digits.into_iter().take(MATCH_ID_DIGITS).collect()
}

/// Result of one completed game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSummary {
    /// Identifier stored in the match history.
    match_id: String,
    /// The secret word.
    word: String,
    /// Category the word came from.
    category: String,
    /// Difficulty level.
    level: String,
    /// Win or loss.
    result: MatchResult,
    /// Points awarded.
    score: u32,
    /// Wrong guesses made.
    errors: u32,
    /// Whether the hint was revealed.
    hint_used: bool,
    /// Achievements unlocked by this game.
    achievements: Vec<Achievement>,
}

/// A game prepared by [`GameService::start_game`].
#[derive(Debug)]
pub struct ActiveGame {
    engine: GameEngine,
    category: String,
    level: String,
}

impl ActiveGame {
    /// The running engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Selected category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Selected level.
    pub fn level(&self) -> &str {
        &self.level
    }
}

/// Orchestrates games over a storage backend and a presentation.
///
/// The service keeps the consecutive-win counter, so games played through the
/// same instance build up a streak.
#[derive(Debug)]
pub struct GameService<S, U> {
    storage: S,
    ui: U,
    streak: WinStreak,
}

impl<S: Storage, U: Presentation> GameService<S, U> {
    /// Creates a service with an empty win streak.
    pub fn new(storage: S, ui: U) -> Self {
        Self {
            storage,
            ui,
            streak: WinStreak::default(),
        }
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The presentation.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Mutable access to the presentation, for screens outside a game.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Current consecutive-win count.
    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    /// Consumes the service, returning its collaborators.
    pub fn into_parts(self) -> (S, U) {
        (self.storage, self.ui)
    }

    /// Plays one game end to end.
    ///
    /// # Errors
    ///
    /// Propagates selection, storage and interruption errors. Statistics are
    /// only written once the game has finished.
    #[instrument(skip(self))]
    pub fn run_session(
        &mut self,
        category: Option<&str>,
        level: Option<&str>,
    ) -> Result<GameSummary, HangmanError> {
        let game = self.start_game(category, level)?;
        self.play(game)
    }

    /// Resolves category and level, picks a word and builds the engine.
    ///
    /// Presets that are not offered by storage fall back to asking the player.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::CategoryNotFound`] or
    /// [`HangmanError::LevelNotFound`] if the final choice is unknown, and
    /// [`HangmanError::NoWords`] for an empty pool.
    #[instrument(skip(self))]
    pub fn start_game(
        &mut self,
        category: Option<&str>,
        level: Option<&str>,
    ) -> Result<ActiveGame, HangmanError> {
        self.ui.clear_messages();
        let categories = self.storage.get_categories();
        let category = match category {
            Some(preset) if categories.iter().any(|c| c == preset) => preset.to_string(),
            preset => {
                if let Some(unknown) = preset {
                    warn!(category = %unknown, "Preset category not available");
                }
                self.ui.prompt_category_choice(&categories)?
            }
        };
        if !categories.contains(&category) {
            return Err(HangmanError::CategoryNotFound(category));
        }

        let levels = self.storage.get_level_attempts();
        let level = match level {
            Some(preset) if levels.iter().any(|l| l.name() == preset) => preset.to_string(),
            preset => {
                if let Some(unknown) = preset {
                    warn!(level = %unknown, "Preset level not available");
                }
                self.ui.prompt_level_choice(&levels)?
            }
        };
        let budget = levels
            .iter()
            .find(|l| *l.name() == level)
            .ok_or_else(|| HangmanError::LevelNotFound(level.clone()))?;
        let attempts = *budget.attempts();

        let word = self.storage.get_word(&category, &level)?;
        let engine = GameEngine::new(word, attempts)?;
        info!(%category, %level, attempts, "Game started");

        self.ui.show_message(
            &format!("Игра началась: {category}, {level} {}", budget.label()),
            false,
        );

        Ok(ActiveGame {
            engine,
            category,
            level,
        })
    }

    /// Runs the input loop of a started game, then scores and records it.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::Interrupted`] if input ends mid-game, or a
    /// storage error while recording the result.
    #[instrument(skip(self, game), fields(category = %game.category, level = %game.level))]
    pub fn play(&mut self, game: ActiveGame) -> Result<GameSummary, HangmanError> {
        let ActiveGame {
            mut engine,
            category,
            level,
        } = game;

        while !engine.status().is_finished() {
            let session = engine.state();
            self.ui
                .render_state(&session, &category, &level, &session.wrong_letters());

            let token = match self.ui.prompt_input() {
                Ok(token) => token,
                Err(HangmanError::InvalidInput(message)) => {
                    self.ui.show_message(&message, true);
                    continue;
                }
                Err(e) => return Err(e),
            };

            if token == HINT_KEYWORD {
                match engine.get_hint() {
                    Ok(hint) => self.ui.show_message(&format!("Подсказка: {hint}"), false),
                    Err(e @ GameError::HintAlreadyUsed) => {
                        self.ui.show_message(&e.to_string(), true);
                    }
                    Err(e) => return Err(e.into()),
                }
                continue;
            }

            match engine.guess(&token) {
                Ok(outcome) => {
                    debug!(
                        %token,
                        correct = outcome.is_correct(),
                        errors = outcome.errors(),
                        "Guess applied"
                    );
                }
                Err(e) if e.is_recoverable() => self.ui.show_message(&e.to_string(), true),
                Err(e) => return Err(e.into()),
            }
        }

        let session = engine.state();
        self.ui
            .render_state(&session, &category, &level, &session.wrong_letters());

        let won = session.is_won();
        let score = score_session(&session);
        if won {
            self.ui.show_message("Вы выиграли!", false);
        } else {
            self.ui.show_message("Вы проиграли! Человек повешен!", true);
        }
        self.ui
            .show_message(&format!("Слово: {}", session.word()), false);
        self.ui.show_message(&format!("Очки за игру: {score}"), false);

        let consecutive_wins = self.streak.record(won);
        let mut stats = self.storage.load_statistics()?;
        let finished = FinishedGame::from_session(&session, score);
        let achievements = evaluate_achievements(&finished, consecutive_wins, &mut stats);

        if !achievements.is_empty() {
            self.ui.show_message("Новые достижения:", false);
            for achievement in &achievements {
                self.ui.show_message(
                    &format!("- {}: {}", achievement, achievement.description()),
                    false,
                );
            }
        }

        let match_id = generate_match_id();
        let result = MatchResult::from_won(won);
        stats.record_match(MatchRecord::new(
            match_id.clone(),
            score,
            session.hint_used(),
            session.errors(),
            result,
        ));
        self.storage.save_statistics(&stats)?;
        info!(%match_id, %result, score, unlocked = achievements.len(), "Game recorded");

        Ok(GameSummary {
            match_id,
            word: session.word().to_string(),
            category,
            level,
            result,
            score,
            errors: session.errors(),
            hint_used: session.hint_used(),
            achievements,
        })
    }
}
