//! Achievement rules and their evaluation.
//!
//! Rules live in [`ACHIEVEMENT_RULES`], a table of condition, achievement and
//! description. Evaluation walks the table once per finished game in table
//! order. An achievement is unlocked at most once, guarded by membership in
//! [`PlayerStatistics::unlocked_achievements`].

use crate::{GameSession, PlayerStatistics};
use tracing::{debug, info, instrument};

/// Every achievement a player can unlock.
///
/// `Display` and `FromStr` use the persisted achievement name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Achievement {
    /// Win without the hint.
    #[strum(serialize = "Без подсказки")]
    NoHint,
    /// Win with the hint.
    #[strum(serialize = "С подсказкой")]
    WithHint,
    /// Win without a single wrong guess.
    #[strum(serialize = "Спидранер")]
    Speedrunner,
    /// First recorded win.
    #[strum(serialize = "Новичок")]
    Novice,
    /// Tenth recorded win.
    #[strum(serialize = "Профи")]
    Pro,
    /// Twenty-fifth recorded win.
    #[strum(serialize = "Мастер")]
    Master,
    /// Five wins in a row.
    #[strum(serialize = "Серия побед")]
    WinningStreak,
    /// Ten wins in a row.
    #[strum(serialize = "Упорство")]
    Persistence,
    /// More than 100 points in one game.
    #[strum(serialize = "Высокий счёт")]
    HighScore,
    /// Win with exactly one attempt left.
    #[strum(serialize = "На грани")]
    OnTheEdge,
}

impl Achievement {
    /// Human-readable unlock condition.
    pub fn description(self) -> &'static str {
        ACHIEVEMENT_RULES
            .iter()
            .find(|rule| rule.achievement == self)
            .map_or("", |rule| rule.description)
    }
}

/// Outcome of a finished game as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedGame {
    /// Whether the word was guessed.
    pub won: bool,
    /// Whether the hint was revealed.
    pub hint_used: bool,
    /// Wrong guesses made.
    pub errors: u32,
    /// Attempt budget of the game.
    pub max_attempts: u32,
    /// Score awarded for the game.
    pub score: u32,
}

impl FinishedGame {
    /// Builds the outcome from a finished session and its score.
    pub fn from_session(session: &GameSession, score: u32) -> Self {
        Self {
            won: session.is_won(),
            hint_used: session.hint_used(),
            errors: session.errors(),
            max_attempts: session.max_attempts(),
            score,
        }
    }
}

/// Inputs visible to a rule condition.
#[derive(Debug, Clone, Copy)]
pub struct AchievementContext<'a> {
    /// The game just finished.
    pub game: &'a FinishedGame,
    /// Wins in a row including this game.
    pub consecutive_wins: u32,
    /// Statistics before this game's counters were applied.
    pub stats: &'a PlayerStatistics,
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct AchievementRule {
    /// Achievement granted when the condition holds.
    pub achievement: Achievement,
    /// Text shown to the player on unlock.
    pub description: &'static str,
    /// Trigger condition.
    pub condition: fn(&AchievementContext<'_>) -> bool,
}

/// Rules in evaluation order.
pub const ACHIEVEMENT_RULES: [AchievementRule; 10] = [
    AchievementRule {
        achievement: Achievement::NoHint,
        description: "Выиграть без использования подсказки",
        condition: |ctx| ctx.game.won && !ctx.game.hint_used,
    },
    AchievementRule {
        achievement: Achievement::WithHint,
        description: "Выиграть используя подсказку",
        condition: |ctx| ctx.game.won && ctx.game.hint_used,
    },
    AchievementRule {
        achievement: Achievement::Speedrunner,
        description: "Выиграть без единой ошибки",
        condition: |ctx| ctx.game.won && ctx.game.errors == 0,
    },
    AchievementRule {
        achievement: Achievement::Novice,
        description: "Первая победа",
        condition: |ctx| ctx.game.won && *ctx.stats.wins() == 0,
    },
    AchievementRule {
        achievement: Achievement::Pro,
        description: "10 побед",
        condition: |ctx| ctx.game.won && ctx.stats.wins().checked_add(1) == Some(10),
    },
    AchievementRule {
        achievement: Achievement::Master,
        description: "25 побед",
        condition: |ctx| ctx.game.won && ctx.stats.wins().checked_add(1) == Some(25),
    },
    AchievementRule {
        achievement: Achievement::WinningStreak,
        description: "5 побед подряд",
        condition: |ctx| ctx.consecutive_wins >= 5,
    },
    AchievementRule {
        achievement: Achievement::Persistence,
        description: "10 побед подряд",
        condition: |ctx| ctx.consecutive_wins >= 10,
    },
    AchievementRule {
        achievement: Achievement::HighScore,
        description: "Набрать более 100 очков в одной игре",
        condition: |ctx| ctx.game.score > 100,
    },
    AchievementRule {
        achievement: Achievement::OnTheEdge,
        description: "Выиграть с одной оставшейся попыткой",
        condition: |ctx| {
            ctx.game.won && ctx.game.errors.checked_add(1) == Some(ctx.game.max_attempts)
        },
    },
];

/// Runs the rule table against a finished game.
///
/// Newly unlocked names are appended to `stats` as they fire, so a name never
/// appears twice. Returns the achievements unlocked by this game, in table
/// order.
#[instrument(skip(stats), fields(unlocked_before = stats.unlocked_achievements().len()))]
pub fn evaluate_achievements(
    game: &FinishedGame,
    consecutive_wins: u32,
    stats: &mut PlayerStatistics,
) -> Vec<Achievement> {
    let mut unlocked = Vec::new();

    for rule in &ACHIEVEMENT_RULES {
        let fires = {
            let ctx = AchievementContext {
                game,
                consecutive_wins,
                stats: &*stats,
            };
            (rule.condition)(&ctx)
        };

        if fires && stats.unlock(rule.achievement.to_string()) {
            info!(achievement = %rule.achievement, "Achievement unlocked");
            unlocked.push(rule.achievement);
        } else if fires {
            debug!(achievement = %rule.achievement, "Already unlocked");
        }
    }

    unlocked
}

/// Consecutive-win counter kept for the lifetime of a process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinStreak(u32);

impl WinStreak {
    /// Current streak length.
    pub fn current(self) -> u32 {
        self.0
    }

    /// Extends the streak on a win, resets it on a loss. Returns the new length.
    pub fn record(&mut self, won: bool) -> u32 {
        self.0 = if won { self.0.saturating_add(1) } else { 0 };
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn won(errors: u32, hint_used: bool, score: u32) -> FinishedGame {
        FinishedGame {
            won: true,
            hint_used,
            errors,
            max_attempts: 7,
            score,
        }
    }

    #[test]
    fn test_every_achievement_has_a_rule() {
        for achievement in Achievement::iter() {
            assert!(!achievement.description().is_empty(), "{achievement:?}");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for achievement in Achievement::iter() {
            assert_eq!(
                Achievement::from_str(achievement.as_ref()).unwrap(),
                achievement
            );
        }
        assert_eq!(Achievement::HighScore.to_string(), "Высокий счёт");
    }

    #[test]
    fn test_first_perfect_win() {
        let mut stats = PlayerStatistics::default();
        let unlocked = evaluate_achievements(&won(0, false, 80), 1, &mut stats);
        assert_eq!(
            unlocked,
            vec![
                Achievement::NoHint,
                Achievement::Speedrunner,
                Achievement::Novice
            ]
        );
        assert_eq!(stats.unlocked_achievements().len(), 3);
    }

    #[test]
    fn test_second_pass_unlocks_nothing_new() {
        let mut stats = PlayerStatistics::default();
        evaluate_achievements(&won(0, false, 80), 1, &mut stats);
        let again = evaluate_achievements(&won(0, false, 80), 2, &mut stats);
        assert!(again.is_empty());
        assert_eq!(stats.unlocked_achievements().len(), 3);
    }

    #[test]
    fn test_loss_unlocks_nothing() {
        let mut stats = PlayerStatistics::default();
        let lost = FinishedGame {
            won: false,
            hint_used: true,
            errors: 7,
            max_attempts: 7,
            score: 0,
        };
        assert!(evaluate_achievements(&lost, 0, &mut stats).is_empty());
    }

    #[test]
    fn test_on_the_edge() {
        let mut stats = PlayerStatistics::default();
        let unlocked = evaluate_achievements(&won(6, true, 0), 1, &mut stats);
        assert!(unlocked.contains(&Achievement::OnTheEdge));
        assert!(unlocked.contains(&Achievement::WithHint));
        assert!(!unlocked.contains(&Achievement::NoHint));
    }

    #[test]
    fn test_saturated_win_count_does_not_overflow() {
        let json = format!(r#"{{"games_played": {max}, "wins": {max}}}"#, max = u32::MAX);
        let mut stats: PlayerStatistics = serde_json::from_str(&json).unwrap();
        let unlocked = evaluate_achievements(&won(0, false, 80), 1, &mut stats);
        assert!(!unlocked.contains(&Achievement::Pro));
        assert!(!unlocked.contains(&Achievement::Master));
        assert!(!unlocked.contains(&Achievement::Novice));
    }

    #[test]
    fn test_win_streak_counter() {
        let mut streak = WinStreak::default();
        assert_eq!(streak.record(true), 1);
        assert_eq!(streak.record(true), 2);
        assert_eq!(streak.record(false), 0);
        assert_eq!(streak.current(), 0);
    }
}
