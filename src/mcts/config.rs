//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Wall-clock budget per decision.
    pub time_limit: Duration,

    /// Iteration cap per decision (0 = bounded by time only).
    pub max_iterations: u32,

    /// Maximum nodes to allocate in the tree.
    /// Once reached, iterations keep running rollouts but stop growing the tree.
    pub max_nodes: usize,

    /// Random seed for expansion and rollouts.
    /// Same seed produces deterministic searches under an iteration cap.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            time_limit: Duration::from_secs(10),
            max_iterations: 0,
            max_nodes: 100_000,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Create a new config with custom exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.time_limit, Duration::from_secs(10));
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_exploration(2.0)
            .with_seed(123)
            .with_max_iterations(50);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_serialization() {
        let config = MctsConfig::default().with_time_limit(Duration::from_millis(250));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MctsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
