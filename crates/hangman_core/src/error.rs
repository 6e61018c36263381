//! Errors raised by the game engine and word validation.

/// Error that can occur when building a word or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The word failed construction-time validation.
    #[display("Некорректное слово: {}", _0)]
    InvalidWord(String),

    /// The attempt budget must allow at least one wrong guess.
    #[display("Количество попыток должно быть больше 0 (получено {})", _0)]
    InvalidAttempts(u32),

    /// The guess is not exactly one alphabetic character.
    #[display("Неверный ввод '{}': требуется одна буква", _0)]
    InvalidGuessFormat(String),

    /// The letter has already been guessed in this game.
    #[display("Буква '{}' уже была угадана", _0)]
    DuplicateGuess(char),

    /// The hint has already been revealed in this game.
    #[display("Подсказка уже использована")]
    HintAlreadyUsed,

    /// The game reached a terminal state.
    #[display("Игра уже завершена")]
    GameAlreadyFinished,
}

impl std::error::Error for GameError {}

impl GameError {
    /// Returns true for errors the player can recover from by entering something else.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessFormat(_) | Self::DuplicateGuess(_) | Self::HintAlreadyUsed
        )
    }
}
