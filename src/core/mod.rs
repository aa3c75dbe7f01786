//! Core engine types: entities, players, state, RNG.
//!
//! Everything here is rule-agnostic: the state stores cards and zones, the
//! rules that move cards around live in [`crate::rules`] and
//! [`crate::cards::library`].

pub mod entity;
pub mod player;
pub mod rng;
pub mod state;

pub use entity::EntityId;
pub use player::{PlayerId, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase, Player};
