//! Persistent player statistics.
//!
//! Field names are the on-disk contract: `games_played`, `wins`,
//! `total_score`, `unlocked_achievements`, `match_history`.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of a match from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchResult {
    /// The word was guessed.
    Win,
    /// The attempt budget ran out.
    Loss,
}

impl MatchResult {
    /// Maps a won flag to a result.
    pub fn from_won(won: bool) -> Self {
        if won { Self::Win } else { Self::Loss }
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MatchRecord {
    match_id: String,
    score: u32,
    hint_used: bool,
    errors: u32,
    result: MatchResult,
}

/// Cumulative statistics across all games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct PlayerStatistics {
    games_played: u32,
    wins: u32,
    total_score: u64,
    unlocked_achievements: Vec<String>,
    match_history: Vec<MatchRecord>,
}

impl PlayerStatistics {
    /// Share of won games, in percent.
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played) * 100.0
        }
    }

    /// Returns true if the achievement was unlocked before.
    pub fn has_achievement(&self, name: &str) -> bool {
        self.unlocked_achievements.iter().any(|a| a == name)
    }

    /// Adds an achievement name. Returns false if it was already unlocked.
    pub fn unlock(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_achievement(&name) {
            return false;
        }
        self.unlocked_achievements.push(name);
        true
    }

    /// Applies a finished game to the counters and appends it to the history.
    #[instrument(skip(self), fields(games_played = self.games_played))]
    pub fn record_match(&mut self, record: MatchRecord) {
        self.games_played += 1;
        if record.result == MatchResult::Win {
            self.wins += 1;
        }
        self.total_score += u64::from(record.score);
        debug!(match_id = %record.match_id, "Match recorded");
        self.match_history.push(record);
    }

    /// The most recent match, if any.
    pub fn last_match(&self) -> Option<&MatchRecord> {
        self.match_history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stats = PlayerStatistics::default();
        assert_eq!(*stats.games_played(), 0);
        assert_eq!(stats.win_percentage(), 0.0);
        assert!(stats.last_match().is_none());
    }

    #[test]
    fn test_record_match_updates_counters() {
        let mut stats = PlayerStatistics::default();
        stats.record_match(MatchRecord::new("123".into(), 80, false, 0, MatchResult::Win));
        stats.record_match(MatchRecord::new("456".into(), 0, true, 7, MatchResult::Loss));

        assert_eq!(*stats.games_played(), 2);
        assert_eq!(*stats.wins(), 1);
        assert_eq!(*stats.total_score(), 80);
        assert_eq!(stats.win_percentage(), 50.0);
        assert_eq!(stats.last_match().unwrap().match_id(), "456");
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut stats = PlayerStatistics::default();
        assert!(stats.unlock("Новичок"));
        assert!(!stats.unlock("Новичок"));
        assert_eq!(stats.unlocked_achievements().len(), 1);
    }

    #[test]
    fn test_wire_format() {
        let mut stats = PlayerStatistics::default();
        stats.record_match(MatchRecord::new("012345678".into(), 80, false, 0, MatchResult::Win));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["games_played"], 1);
        assert_eq!(json["total_score"], 80);
        assert_eq!(json["match_history"][0]["match_id"], "012345678");
        assert_eq!(json["match_history"][0]["hint_used"], false);
        assert_eq!(json["match_history"][0]["result"], "win");
    }

    #[test]
    fn test_missing_fields_default() {
        let stats: PlayerStatistics = serde_json::from_str(r#"{"wins": 3}"#).unwrap();
        assert_eq!(*stats.wins(), 3);
        assert!(stats.match_history().is_empty());
    }
}
