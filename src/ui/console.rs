//! Line-based terminal UI.

use super::{HINT_KEYWORD, Presentation, gallows_stage};
use crate::{HangmanError, LevelBudget};
use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use hangman_core::{GameSession, PlayerStatistics};
use rand::prelude::IndexedRandom;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

const TITLE: &str = "=== Виселица ===";
const SEPARATOR_WIDTH: usize = 40;
const MAX_CATEGORY_ATTEMPTS: u32 = 3;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum MenuChoice {
    /// Start a new game.
    #[strum(serialize = "Начать игру")]
    Play,
    /// Show player statistics.
    #[strum(serialize = "Посмотреть статистику")]
    Statistics,
    /// Quit.
    #[strum(serialize = "Выход")]
    Exit,
}

/// Terminal UI reading lines from `R` and writing to `W`.
#[derive(Debug)]
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    pending: Vec<(String, bool)>,
}

impl ConsoleUi<std::io::StdinLock<'static>, std::io::Stdout> {
    /// UI bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    /// Creates a UI over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
            pending: Vec::new(),
        }
    }

    /// Disables clearing the screen before each board.
    pub fn without_clear_screen(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Consumes the UI, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.output, "{text}") {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn prompt(&mut self, text: &str) {
        if let Err(e) = write!(self.output, "{text}").and_then(|()| self.output.flush()) {
            warn!(error = %e, "Failed to write prompt");
        }
    }

    fn clear(&mut self) {
        if !self.clear_screen {
            return;
        }
        if let Err(e) = crossterm::queue!(self.output, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(error = %e, "Failed to clear screen");
        }
    }

    fn separator(&mut self) {
        self.line("=".repeat(SEPARATOR_WIDTH).cyan());
    }

    /// Reads one trimmed line. End of input means the player left.
    fn read_line(&mut self) -> Result<String, HangmanError> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => {
                debug!("Input closed");
                Err(HangmanError::Interrupted)
            }
            Ok(_) => Ok(buf.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                Err(HangmanError::Interrupted)
            }
        }
    }

    /// Waits for Enter.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::Interrupted`] when input ends.
    pub fn pause(&mut self) -> Result<(), HangmanError> {
        self.prompt("Нажмите Enter для продолжения...");
        self.read_line().map(|_| ())
    }

    /// Shows the main menu until a valid choice is made.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::Interrupted`] when input ends.
    #[instrument(skip(self))]
    pub fn main_menu(&mut self) -> Result<MenuChoice, HangmanError> {
        let choices: Vec<MenuChoice> = MenuChoice::iter().collect();
        self.pending.clear();
        loop {
            self.clear();
            self.line(TITLE.magenta());
            self.line("Выберите действие:");
            for (i, choice) in choices.iter().enumerate() {
                self.line(format!("{}. {}", i + 1, choice));
            }
            self.prompt(&format!("Ваш выбор (1-{}): ", choices.len()));

            let answer = self.read_line()?;
            match parse_index(&answer, choices.len()) {
                Some(index) => return Ok(choices[index]),
                None => self.line("Неверный выбор, попробуйте снова.".red()),
            }
        }
    }

    /// Prints the statistics table.
    #[instrument(skip(self, stats))]
    pub fn show_statistics(&mut self, stats: &PlayerStatistics) {
        self.clear();
        self.line("=== Статистика игрока ===".magenta());
        self.separator();
        self.line(format!("Игр сыграно: {}", stats.games_played()).yellow());
        self.line(format!("Побед: {}", stats.wins()).yellow());
        self.line(format!("Процент побед: {:.2}%", stats.win_percentage()).yellow());
        self.line(format!("Общий счёт: {}", stats.total_score()).yellow());
        self.separator();

        self.line("Разблокированные достижения:".green());
        if stats.unlocked_achievements().is_empty() {
            self.line("  (нет достижений)");
        }
        for name in stats.unlocked_achievements() {
            self.line(format!("  - {name}").magenta());
        }
        self.separator();

        self.line("Последний матч:".green());
        match stats.last_match() {
            Some(last) => {
                self.line(format!("Матч ID: {}", last.match_id()).yellow());
                self.line(format!("Очки: {}", last.score()).yellow());
                let hint = if *last.hint_used() { "Да" } else { "Нет" };
                self.line(format!("Подсказка использована: {hint}").yellow());
                self.line(format!("Ошибок: {}", last.errors()).yellow());
                self.line(format!("Результат: {}", last.result()).yellow());
            }
            None => self.line("  (нет матчей)"),
        }
        self.separator();
    }
}

impl<R: BufRead, W: Write> Presentation for ConsoleUi<R, W> {
    fn render_state(
        &mut self,
        session: &GameSession,
        category: &str,
        level: &str,
        wrong_letters: &BTreeSet<char>,
    ) {
        self.clear();
        let wrong = if wrong_letters.is_empty() {
            "(нет)".to_string()
        } else {
            join_letters(wrong_letters)
        };
        let hint = if session.hint_used() {
            session.word().hint().clone()
        } else {
            "Ещё не использована".to_string()
        };

        self.line(TITLE.magenta());
        self.line(format!("Категория: {category}, Уровень: {level}").cyan());
        self.line(gallows_stage(session.errors(), session.max_attempts()));
        self.line(format!("Слово: {}", session.mask()).yellow());
        self.line(format!("Осталось попыток: {}", session.remaining_attempts()).green());
        self.line(format!("Неверные буквы: {wrong}").red());
        self.line(format!("Подсказка: {hint}").blue());
        self.line("-----------".cyan());

        for (text, is_error) in std::mem::take(&mut self.pending) {
            if is_error {
                self.line(text.red());
            } else {
                self.line(text);
            }
        }
    }

    #[instrument(skip(self))]
    fn prompt_input(&mut self) -> Result<String, HangmanError> {
        self.prompt(&format!("Введите букву или '{HINT_KEYWORD}' для подсказки: "));
        let token = self.read_line()?.to_lowercase();
        let mut chars = token.chars();
        let single_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

        if token == HINT_KEYWORD || single_letter {
            Ok(token)
        } else {
            debug!(%token, "Rejected input");
            Err(HangmanError::InvalidInput(
                "Введите ровно одну букву (латиница/кириллица)".to_string(),
            ))
        }
    }

    #[instrument(skip(self))]
    fn prompt_category_choice(&mut self, categories: &[String]) -> Result<String, HangmanError> {
        if categories.is_empty() {
            return Err(HangmanError::InvalidInput(
                "Нет доступных категорий".to_string(),
            ));
        }

        let mut failures = 0;
        loop {
            self.clear();
            self.line(TITLE.magenta());
            self.line("Доступные категории:");
            for (i, category) in categories.iter().enumerate() {
                self.line(format!("{}. {}", i + 1, category));
            }
            self.prompt("Выберите категорию (номер): ");

            let answer = self.read_line()?;
            if let Some(index) = parse_index(&answer, categories.len()) {
                return Ok(categories[index].clone());
            }

            failures += 1;
            if failures >= MAX_CATEGORY_ATTEMPTS {
                self.line(
                    "Слишком много некорректных попыток, выбирается случайная категория.".red(),
                );
                let fallback = categories
                    .choose(&mut rand::rng())
                    .cloned()
                    .unwrap_or_else(|| categories[0].clone());
                debug!(category = %fallback, "Picked random category");
                return Ok(fallback);
            }
            let reason = if answer.is_empty() {
                "Ввод не может быть пустым"
            } else {
                "Неверный выбор категории, попробуйте снова."
            };
            self.line(reason.red());
        }
    }

    #[instrument(skip(self, levels))]
    fn prompt_level_choice(&mut self, levels: &[LevelBudget]) -> Result<String, HangmanError> {
        if levels.is_empty() {
            return Err(HangmanError::InvalidInput("Нет доступных уровней".to_string()));
        }

        loop {
            self.clear();
            self.line(TITLE.magenta());
            self.line("Доступные уровни:");
            for (i, level) in levels.iter().enumerate() {
                self.line(format!("{}. {} {}", i + 1, level.name(), level.label()));
            }
            self.prompt("Выберите уровень (номер): ");

            let answer = self.read_line()?;
            match parse_index(&answer, levels.len()) {
                Some(index) => return Ok(levels[index].name().clone()),
                None if answer.is_empty() => self.line("Ввод не может быть пустым".red()),
                None => self.line("Неверный номер уровня".red()),
            }
        }
    }

    fn show_message(&mut self, text: &str, is_error: bool) {
        if is_error {
            self.line(text.red());
        } else {
            self.line(text);
        }
        self.pending.push((text.to_string(), is_error));
    }

    fn clear_messages(&mut self) {
        self.pending.clear();
    }
}

/// Parses a 1-based menu answer into an index below `len`.
fn parse_index(answer: &str, len: usize) -> Option<usize> {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&i| i < len)
}

fn join_letters(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
