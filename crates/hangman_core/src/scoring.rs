//! Score for a finished game.

use crate::GameSession;
use tracing::instrument;

/// Points per letter of a won word.
pub const POINTS_PER_LETTER: i64 = 10;
/// Points deducted per wrong guess.
pub const ERROR_PENALTY: i64 = 5;
/// Points deducted when the hint was used.
pub const HINT_PENALTY: i64 = 20;
/// Bonus for a win with no errors and no hint.
pub const PERFECT_BONUS: i64 = 50;

/// Computes the score of a game. A loss is always worth zero and the result is
/// never negative.
///
/// ```
/// use hangman_core::score;
///
/// assert_eq!(score(3, 0, false, true), 80);
/// assert_eq!(score(3, 0, false, false), 0);
/// ```
#[instrument]
pub fn score(word_len: usize, errors: u32, hint_used: bool, won: bool) -> u32 {
    if !won {
        return 0;
    }

    let base = i64::try_from(word_len).unwrap_or(i64::MAX / 2) * POINTS_PER_LETTER;
    let penalty_errors = i64::from(errors) * ERROR_PENALTY;
    let penalty_hint = if hint_used { HINT_PENALTY } else { 0 };
    let bonus_perfect = if errors == 0 && !hint_used {
        PERFECT_BONUS
    } else {
        0
    };

    let total = base - penalty_errors - penalty_hint + bonus_perfect;
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

/// Scores a finished session.
pub fn score_session(session: &GameSession) -> u32 {
    score(
        session.word().len(),
        session.errors(),
        session.hint_used(),
        session.is_won(),
    )
}
