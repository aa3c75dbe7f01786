//! Search statistics for diagnostics and tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics of the last decision a search agent made.
///
/// Each agent fills in the counters that apply to it: the minimax agents
/// count nodes and completed depths, MCTS counts iterations and rollouts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Minimax nodes visited.
    pub nodes_searched: u64,

    /// Deepest fully completed iterative-deepening depth.
    pub completed_depth: u32,

    /// Hidden-information samples searched.
    pub samples: u32,

    /// MCTS iterations performed.
    pub iterations: u32,

    /// Tree nodes expanded (added to the MCTS tree).
    pub nodes_expanded: u32,

    /// Rollouts played to the end of the game.
    pub simulations: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the wall-clock time of a search.
    pub fn finish(&mut self, elapsed: Duration) {
        self.time_us = elapsed.as_micros() as u64;
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        per_second(self.iterations as f64, self.time_us)
    }

    /// Calculate minimax nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        per_second(self.nodes_searched as f64, self.time_us)
    }
}

fn per_second(count: f64, time_us: u64) -> f64 {
    if time_us == 0 {
        0.0
    } else {
        count / (time_us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.nodes_searched, 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        stats.iterations = 1000;
        stats.nodes_searched = 500;
        stats.finish(Duration::from_secs(1));

        assert_eq!(stats.iterations_per_second(), 1000.0);
        assert_eq!(stats.nodes_per_second(), 500.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.iterations = 100;
        stats.completed_depth = 3;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
