//! Game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores with nobody to blame for the end.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Reward in `[-1, 1]` from `player`'s point of view.
    #[must_use]
    pub fn reward(&self, player: PlayerId) -> f64 {
        match self {
            GameResult::Winner(p) if *p == player => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw => 0.0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_reward_is_zero_sum() {
        let result = GameResult::Winner(PlayerId::ZERO);
        assert_eq!(result.reward(PlayerId::ZERO), 1.0);
        assert_eq!(result.reward(PlayerId::ONE), -1.0);
        assert_eq!(GameResult::Draw.reward(PlayerId::ONE), 0.0);
        assert_eq!(result.to_string(), "Player 1 wins");
    }
}
