//! # gods-engine
//!
//! Rules engine and search AIs for Gods, a two-player card game of
//! wonders, events and contested People.
//!
//! ## Design Principles
//!
//! 1. **Choice-Driven**: The engine never calls an agent itself. It advances
//!    the turn until a [`Choice`] is pending and hands it out; every card
//!    effect that needs a decision enqueues one.
//!
//! 2. **Cheap Branching**: All state lives in `im` persistent vectors, so a
//!    search clones the whole game per branch and mutates the copy.
//!
//! 3. **Deterministic**: The game carries its own seeded [`GameRng`]; the
//!    same seed and the same choices replay the same game.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, game state, RNG
//! - `zones`: Zone names, locations and positional card addresses
//! - `cards`: Card data, the built-in catalog and the effect library
//! - `choice`: Pending decisions, their actions and display views
//! - `rules`: Card operations, scoring, the turn state machine, setup
//! - `agents`: The [`Agent`] trait and the simple agents
//! - `search`: Minimax and stochastic minimax
//! - `mcts`: Monte Carlo Tree Search
//! - `snapshot`: Binary state snapshots

pub mod agents;
pub mod cards;
pub mod choice;
pub mod core;
pub mod error;
pub mod mcts;
pub mod rules;
pub mod search;
pub mod snapshot;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{EntityId, GameRng, GameState, Phase, PlayerId};

pub use crate::zones::{CardId, Location, Zone};

pub use crate::cards::{BuiltinCatalog, Card, CardColor, CardIndex, CardRecord, CardSource, CardType};

pub use crate::choice::{Action, Choice, ChoiceKind, ChoiceView};

pub use crate::rules::{
    apply_action, apply_choice, final_result, get_next_choice, quick_setup, run_game, GameResult,
    GameSetup,
};

pub use crate::agents::{Agent, DuelAgent, RandomAgent};

pub use crate::search::{MinimaxAgent, MinimaxConfig, StochasticConfig, StochasticMinimaxAgent};

pub use crate::mcts::{MctsAgent, MctsConfig};

pub use crate::error::{GodsError, Result};
