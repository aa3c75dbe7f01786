//! Alpha-beta minimax with iterative deepening.
//!
//! ## Depth
//!
//! Depth is only charged for decisions of the opponent. A turn of the
//! searching player, with every sub-choice its cards spawn, is explored in
//! full before the opponent's reply costs one ply. Forced choices are
//! applied without branching.
//!
//! ## Time
//!
//! The clock is polled every 1024 nodes. Once the budget is spent every
//! open node returns 0 and the depth in progress is thrown away; only
//! completed depths contribute to the answer.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::eval::{heuristic, terminal, DECISIVE_SCORE};
use super::stats::SearchStats;
use crate::agents::Agent;
use crate::choice::{Action, Choice};
use crate::core::{GameState, PlayerId};
use crate::rules::turn::{apply_action, next_open_decision};

/// Minimax configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Deepest iterative-deepening depth.
    pub max_depth: u32,

    /// Wall-clock budget per decision.
    pub time_limit: Duration,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            time_limit: Duration::from_secs(10),
        }
    }
}

impl MinimaxConfig {
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }
}

/// Mutable bookkeeping of one search.
pub(crate) struct SearchContext {
    pub player: PlayerId,
    start: Instant,
    time_limit: Duration,
    pub time_up: bool,
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(player: PlayerId, time_limit: Duration) -> Self {
        Self {
            player,
            start: Instant::now(),
            time_limit,
            time_up: false,
            nodes: 0,
        }
    }

    fn check_time(&mut self) {
        if self.start.elapsed() >= self.time_limit {
            self.time_up = true;
        }
    }
}

/// Index of the highest score; the first one on ties.
pub(crate) fn best_index(scores: &[f64]) -> usize {
    let mut best = 0;
    for (index, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = index;
        }
    }
    best
}

/// Iterative deepening over depths `1..=max_depth`.
///
/// Returns the scores of the last completed depth (one per action,
/// `-inf` if not even depth 1 finished) and that depth.
pub(crate) fn iterative_deepening(
    state: &GameState,
    choice: &Choice,
    actions: &[Action],
    max_depth: u32,
    ctx: &mut SearchContext,
) -> (Vec<f64>, u32) {
    let mut order: Vec<usize> = (0..actions.len()).collect();
    let mut scores = vec![f64::NEG_INFINITY; actions.len()];
    let mut completed = 0;

    for depth in 1..=max_depth {
        if ctx.time_up {
            break;
        }
        let depth_scores = search_root(state, choice, actions, depth as i32, &order, ctx);
        if ctx.time_up {
            break;
        }
        order.sort_by(|&a, &b| depth_scores[b].total_cmp(&depth_scores[a]));
        scores = depth_scores;
        completed = depth;
        log::debug!(
            "depth {depth}: best {:.2} after {} nodes",
            scores[order[0]],
            ctx.nodes
        );
        if scores[order[0]].abs() >= DECISIVE_SCORE {
            break;
        }
    }
    (scores, completed)
}

/// Try every root action in `order`.
fn search_root(
    state: &GameState,
    choice: &Choice,
    actions: &[Action],
    depth: i32,
    order: &[usize],
    ctx: &mut SearchContext,
) -> Vec<f64> {
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut scores = vec![f64::NEG_INFINITY; actions.len()];

    for &index in order {
        if ctx.time_up {
            break;
        }
        let mut branch = state.clone();
        apply_action(&mut branch, choice, actions[index].clone());
        let score = minimax(&mut branch, depth, alpha, beta, ctx);
        scores[index] = score;
        alpha = alpha.max(score);
    }
    scores
}

fn minimax(state: &mut GameState, depth: i32, mut alpha: f64, mut beta: f64, ctx: &mut SearchContext) -> f64 {
    ctx.nodes += 1;
    if ctx.nodes & 1023 == 0 {
        ctx.check_time();
    }
    if ctx.time_up {
        return 0.0;
    }
    if state.game_over {
        return terminal(state, ctx.player);
    }

    let Some(decision) = next_open_decision(state) else {
        return terminal(state, ctx.player);
    };
    let maximizing = decision.choice.player == ctx.player;
    let next_depth = if maximizing { depth } else { depth - 1 };
    if next_depth < 0 {
        return heuristic(state, ctx.player);
    }

    let mut value = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
    for action in &decision.actions {
        let mut branch = state.clone();
        apply_action(&mut branch, &decision.choice, action.clone());
        let score = minimax(&mut branch, next_depth, alpha, beta, ctx);
        if maximizing {
            value = value.max(score);
            alpha = alpha.max(value);
        } else {
            value = value.min(score);
            beta = beta.min(value);
        }
        if alpha >= beta {
            break;
        }
    }
    value
}

/// Iterative-deepening alpha-beta agent.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    config: MinimaxConfig,
    stats: SearchStats,
}

impl MinimaxAgent {
    #[must_use]
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Scores of every action at the deepest completed depth.
    pub fn score_actions(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> Vec<f64> {
        self.stats.reset();
        let start = Instant::now();
        let mut ctx = SearchContext::new(choice.player, self.config.time_limit);

        let (scores, completed) =
            iterative_deepening(state, choice, actions, self.config.max_depth, &mut ctx);

        self.stats.nodes_searched = ctx.nodes;
        self.stats.completed_depth = completed;
        self.stats.finish(start.elapsed());
        scores
    }
}

impl Agent for MinimaxAgent {
    fn message(&mut self, _text: &str) {}

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        if actions.len() <= 1 {
            self.stats.reset();
            return 0;
        }
        let scores = self.score_actions(state, choice, actions);
        let best = best_index(&scores);
        log::debug!(
            "{}: minimax picks option {best} ({:.2}), depth {}, {} nodes",
            choice.player,
            scores[best],
            self.stats.completed_depth,
            self.stats.nodes_searched
        );
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_index_prefers_first_on_ties() {
        assert_eq!(best_index(&[1.0, 3.0, 3.0]), 1);
        assert_eq!(best_index(&[f64::NEG_INFINITY, f64::NEG_INFINITY]), 0);
    }

    #[test]
    fn test_config_builders() {
        let config = MinimaxConfig::default()
            .with_max_depth(2)
            .with_time_limit(Duration::from_millis(50));
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.time_limit, Duration::from_millis(50));
    }
}
