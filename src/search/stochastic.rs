//! Minimax over sampled hidden information.
//!
//! The searching player cannot see the opponent's hand or the order of
//! either deck. Each sample redeals those from what is known (the
//! opponent's hand and deck pooled, reshuffled and split at the same hand
//! size; the own deck reshuffled) and runs an iterative-deepening search on
//! the result. Samples vote for their best action; ties between equally
//! voted actions go to the better average score.

use std::time::Instant;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::minimax::{best_index, iterative_deepening, MinimaxConfig, SearchContext};
use super::stats::SearchStats;
use crate::agents::Agent;
use crate::choice::{Action, Choice};
use crate::core::{EntityId, GameRng, GameState, PlayerId};
use crate::zones::Zone;

/// Stochastic minimax configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StochasticConfig {
    /// Depth and total time budget, split evenly across samples.
    pub minimax: MinimaxConfig,

    /// Number of redeals searched per decision.
    pub num_samples: u32,

    /// Seed of the sampling stream.
    pub seed: u64,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            minimax: MinimaxConfig::default(),
            num_samples: 20,
            seed: 42,
        }
    }
}

impl StochasticConfig {
    #[must_use]
    pub fn with_minimax(mut self, minimax: MinimaxConfig) -> Self {
        self.minimax = minimax;
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: u32) -> Self {
        assert!(samples > 0, "At least one sample is required");
        self.num_samples = samples;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Redeal what `player` cannot see.
#[must_use]
pub fn sample_state(state: &GameState, player: PlayerId, rng: &mut GameRng) -> GameState {
    let mut sampled = state.clone();
    sampled.rng = rng.fork();

    let opponent = player.opponent();
    let hand_size = sampled.player(opponent).hand.len();
    let mut hidden: Vec<EntityId> = sampled
        .player(opponent)
        .hand
        .iter()
        .chain(sampled.player(opponent).deck.iter())
        .copied()
        .collect();
    rng.shuffle(&mut hidden);
    let deck: Vector<EntityId> = hidden.split_off(hand_size).into_iter().collect();
    let hand: Vector<EntityId> = hidden.into_iter().collect();
    sampled.replace_zone(Zone::Hand, opponent, hand);
    sampled.replace_zone(Zone::Deck, opponent, deck);

    let own_deck = rng.shuffled(&sampled.player(player).deck);
    sampled.replace_zone(Zone::Deck, player, own_deck);
    sampled
}

/// Root-sampling minimax agent.
#[derive(Clone, Debug)]
pub struct StochasticMinimaxAgent {
    config: StochasticConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl StochasticMinimaxAgent {
    #[must_use]
    pub fn new(config: StochasticConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn search(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        let start = Instant::now();
        let budget = self.config.minimax.time_limit / self.config.num_samples.max(1);
        let mut votes = vec![0u32; actions.len()];
        let mut totals = vec![0.0f64; actions.len()];
        let mut counted = vec![0u32; actions.len()];

        for sample in 0..self.config.num_samples {
            let sampled = sample_state(state, choice.player, &mut self.rng);
            if choice.generate_actions(&sampled) != actions {
                log::debug!("sample {sample}: root options differ, skipped");
                continue;
            }

            let mut ctx = SearchContext::new(choice.player, budget);
            let (scores, depth) = iterative_deepening(
                &sampled,
                choice,
                actions,
                self.config.minimax.max_depth,
                &mut ctx,
            );
            self.stats.nodes_searched += ctx.nodes;
            self.stats.completed_depth = self.stats.completed_depth.max(depth);
            if depth == 0 {
                continue;
            }
            self.stats.samples += 1;

            let best = best_index(&scores);
            votes[best] += 1;
            for (index, &score) in scores.iter().enumerate() {
                if score.is_finite() {
                    totals[index] += score;
                    counted[index] += 1;
                }
            }
            log::debug!("sample {sample}: option {best} ({:.2}) at depth {depth}", scores[best]);
        }

        self.stats.finish(start.elapsed());
        let averages: Vec<f64> = totals
            .iter()
            .zip(&counted)
            .map(|(&total, &count)| {
                if count == 0 {
                    f64::NEG_INFINITY
                } else {
                    total / count as f64
                }
            })
            .collect();

        let mut best = 0;
        for index in 1..actions.len() {
            let more_votes = votes[index] > votes[best];
            let better_tie = votes[index] == votes[best] && averages[index] > averages[best];
            if more_votes || better_tie {
                best = index;
            }
        }
        best
    }
}

impl Agent for StochasticMinimaxAgent {
    fn message(&mut self, _text: &str) {}

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        self.stats.reset();
        if actions.len() <= 1 {
            return 0;
        }
        let best = self.search(state, choice, actions);
        log::debug!(
            "{}: stochastic minimax picks option {best} over {} samples",
            choice.player,
            self.stats.samples
        );
        best
    }
}
