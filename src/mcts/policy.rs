//! Selection policies.
//!
//! Rewards on the edges are always from the root player's point of view,
//! at every level of the tree. The opponent's replies are not modeled as
//! adversarial; visit counts alone shape how often each reply is explored.

use super::config::MctsConfig;
use super::node::MctsNode;

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select an edge index of `node`.
    fn select(&self, node: &MctsNode, config: &MctsConfig) -> usize;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high reward) with exploration (low visits).
/// Formula: Q(a) + c * sqrt(ln(N) / n(a))
#[derive(Clone, Debug, Default)]
pub struct Ucb1;

impl SelectionPolicy for Ucb1 {
    fn select(&self, node: &MctsNode, config: &MctsConfig) -> usize {
        let ln_parent = (node.visits.max(1) as f64).ln();

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, edge) in node.edges.iter().enumerate() {
            let score = if edge.visits == 0 {
                f64::INFINITY
            } else {
                edge.mean_reward()
                    + config.exploration_constant * (ln_parent / edge.visits as f64).sqrt()
            };
            if score > best_score {
                best = index;
                best_score = score;
            }
        }
        best
    }
}
