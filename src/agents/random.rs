//! Uniform random agent.

use super::Agent;
use crate::choice::{Action, Choice};
use crate::core::{GameRng, GameState};

/// Picks uniformly among the legal actions.
///
/// Silent: used for search rollouts, where narration would only be noise.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn message(&mut self, _text: &str) {}

    fn choose_action(&mut self, _state: &GameState, _choice: &Choice, actions: &[Action]) -> usize {
        self.rng.gen_range_usize(0..actions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{final_result, play_out, quick_setup};

    #[test]
    fn test_random_game_finishes() {
        let mut state = quick_setup(11).unwrap();
        let mut agent = RandomAgent::new(1);

        play_out(&mut state, &mut agent).unwrap();

        assert!(state.game_over);
        assert!(state.check_zones().is_ok());
        let _ = final_result(&state);
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let mut first = quick_setup(4).unwrap();
        let mut second = quick_setup(4).unwrap();

        play_out(&mut first, &mut RandomAgent::new(8)).unwrap();
        play_out(&mut second, &mut RandomAgent::new(8)).unwrap();

        assert_eq!(first.players, second.players);
        assert_eq!(first.current_player, second.current_player);
    }
}
