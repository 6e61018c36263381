//! ASCII gallows drawings.

/// Gallows drawings from empty to fully hanged.
pub const GALLOWS_STAGES: [&str; 8] = [
    r"
  +---+
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
=========",
];

/// Picks the drawing for a game state. A spent budget always shows the last
/// stage, whatever the budget was.
pub fn gallows_stage(errors: u32, max_attempts: u32) -> &'static str {
    let last = GALLOWS_STAGES.len() - 1;
    let index = if errors >= max_attempts {
        last
    } else {
        usize::try_from(errors).map_or(last, |e| e.min(last))
    };
    GALLOWS_STAGES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_shows_empty_gallows() {
        assert_eq!(gallows_stage(0, 7), GALLOWS_STAGES[0]);
    }

    #[test]
    fn test_lost_game_shows_last_stage() {
        assert_eq!(gallows_stage(5, 5), GALLOWS_STAGES[7]);
        assert_eq!(gallows_stage(1, 1), GALLOWS_STAGES[7]);
    }

    #[test]
    fn test_stage_follows_errors() {
        assert_eq!(gallows_stage(3, 7), GALLOWS_STAGES[3]);
    }
}
