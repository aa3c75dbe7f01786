//! Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes in a flat vector addressed by [`NodeId`]
//! - **Real rollouts**: simulations play the rest of the game with the
//!   actual rules and a uniform random agent
//! - **Root-player rewards**: every edge accumulates ±1 from the searching
//!   player's view
//! - **Pluggable selection**: [`Ucb1`] by default
//!
//! ## Usage
//!
//! ```rust
//! use gods_engine::agents::Agent;
//! use gods_engine::mcts::{MctsAgent, MctsConfig};
//! use gods_engine::rules::{get_next_choice, quick_setup};
//!
//! let mut state = quick_setup(1).unwrap();
//! let decision = get_next_choice(&mut state).unwrap();
//!
//! let mut agent = MctsAgent::new(MctsConfig::default().with_max_iterations(20));
//! let index = agent.choose_action(&state, &decision.choice, &decision.actions);
//! assert!(index < decision.actions.len());
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod tree;

pub use config::MctsConfig;
pub use node::{Edge, MctsNode, NodeId};
pub use policy::{SelectionPolicy, Ucb1};
pub use search::MctsAgent;
pub use tree::{MctsTree, TreeStats};
