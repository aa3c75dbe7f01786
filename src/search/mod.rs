//! Minimax search agents and their shared evaluation.
//!
//! [`MinimaxAgent`] searches the true state. [`StochasticMinimaxAgent`]
//! searches redeals of the hidden cards and votes over them. Both drive the
//! turn state machine on cloned states and report [`SearchStats`].

pub mod eval;
pub mod minimax;
pub mod stats;
pub mod stochastic;

pub use eval::{heuristic, terminal};
pub use minimax::{MinimaxAgent, MinimaxConfig};
pub use stats::SearchStats;
pub use stochastic::{sample_state, StochasticConfig, StochasticMinimaxAgent};
