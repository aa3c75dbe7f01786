//! MCTS agent.
//!
//! ## Iteration
//!
//! 1. Clone the root state and give the copy a fresh random stream.
//! 2. Descend from the root: expand a random untried edge if the node has
//!    one, otherwise follow the selection policy.
//! 3. Roll out the rest of the game with uniformly random choices on the
//!    real engine.
//! 4. Back the result (±1 for the root player, 0 for a draw) up through
//!    every ancestor.
//!
//! A node is built from the decision found when it is first reached. Later
//! iterations may reach it with a different draw behind it, and so with a
//! different number of options; the descent stops there and the rollout
//! starts from that position.
//!
//! The answer is the root edge with the most visits.

use std::time::Instant;

use super::config::MctsConfig;
use super::policy::{SelectionPolicy, Ucb1};
use super::tree::MctsTree;
use crate::agents::{Agent, RandomAgent};
use crate::choice::{Action, Choice};
use crate::core::{GameRng, GameState, PlayerId};
use crate::rules::turn::{apply_action, next_open_decision, play_out, Decision};
use crate::rules::final_result;
use crate::search::SearchStats;

/// Monte Carlo Tree Search agent.
///
/// Owns the search tree, configuration and random stream. The tree is
/// rebuilt for every decision.
pub struct MctsAgent {
    /// Search configuration.
    config: MctsConfig,

    /// The search tree.
    tree: MctsTree,

    /// RNG for expansion and rollouts.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Search statistics.
    stats: SearchStats,
}

impl MctsAgent {
    /// Create a new MCTS agent.
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            tree: MctsTree::with_capacity(PlayerId::ZERO, config.max_nodes.min(1 << 16)),
            config,
            rng,
            selection: Box::new(Ucb1),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    #[must_use]
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The tree of the last decision.
    #[must_use]
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    /// Visits and mean reward of every root action, in action order.
    #[must_use]
    pub fn root_summary(&self) -> Vec<(u32, f64)> {
        let mut summary = vec![(0, 0.0); self.tree.root_node().edges.len()];
        for edge in &self.tree.root_node().edges {
            summary[edge.action_index] = (edge.visits, edge.mean_reward());
        }
        summary
    }

    /// Run the search and return the index of the chosen action.
    pub fn search(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        let start = Instant::now();
        self.stats.reset();

        self.tree.reset(choice.player);
        let root = self.tree.root();
        self.tree.get_mut(root).init_edges(choice.player, actions.len());

        loop {
            let capped = self.config.max_iterations > 0
                && self.stats.iterations >= self.config.max_iterations;
            if capped || self.tree.len() >= self.config.max_nodes {
                break;
            }
            if start.elapsed() >= self.config.time_limit {
                break;
            }
            self.iteration(state, choice, actions);
            self.stats.iterations += 1;
        }

        self.stats.finish(start.elapsed());
        let root_node = self.tree.root_node();
        root_node
            .most_visited_edge()
            .map_or(0, |edge| root_node.edges[edge].action_index)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, root_state: &GameState, root_choice: &Choice, root_actions: &[Action]) {
        let mut state = root_state.clone();
        state.rng = self.rng.fork();

        let mut current = self.tree.root();
        let mut decision = Some(Decision {
            choice: root_choice.clone(),
            actions: root_actions.to_vec(),
        });

        // === SELECTION / EXPANSION ===
        while let Some(Decision { choice, mut actions }) = decision.take() {
            let node = self.tree.get(current);
            if node.edges.len() != actions.len() {
                state.queue.push_front(choice);
                break;
            }

            let edge_idx = if node.has_unexpanded() {
                let untried: Vec<usize> = node.unexpanded_edges().collect();
                untried[self.rng.gen_range_usize(0..untried.len())]
            } else {
                self.selection.select(node, &self.config)
            };

            let action_index = self.tree.get(current).edges[edge_idx].action_index;
            let action = actions.swap_remove(action_index);
            apply_action(&mut state, &choice, action);
            let next = next_open_decision(&mut state);

            let child = self.tree.get(current).edges[edge_idx].child;
            if child.is_none() {
                let shape = next.as_ref().map(|open| (open.choice.player, open.actions.len()));
                current = self.tree.add_child(current, edge_idx, shape);
                self.stats.nodes_expanded += 1;
                if let Some(open) = next {
                    state.queue.push_front(open.choice);
                }
                break;
            }
            current = child;
            decision = next;
        }

        // === SIMULATION ===
        let mut rollout = RandomAgent::from_rng(self.rng.fork());
        if let Err(err) = play_out(&mut state, &mut rollout) {
            log::warn!("rollout aborted: {err}");
        }
        self.stats.simulations += 1;

        // === BACKPROPAGATION ===
        let reward = final_result(&state).reward(root_choice.player);
        self.tree.backpropagate(current, reward);
    }
}

impl Agent for MctsAgent {
    fn message(&mut self, _text: &str) {}

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        if actions.len() <= 1 {
            self.stats.reset();
            return 0;
        }
        let best = self.search(state, choice, actions);
        if log::log_enabled!(log::Level::Debug) {
            let shape = self.tree.stats();
            log::debug!(
                "{}: mcts picks option {best} after {} iterations \
                 ({} nodes, depth {}, branching {:.1}, line {:?})",
                choice.player,
                self.stats.iterations,
                shape.node_count,
                shape.max_depth,
                shape.branching_factor(),
                self.tree.principal_line()
            );
        }
        best
    }
}
