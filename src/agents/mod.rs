//! Decision makers.
//!
//! An [`Agent`] is asked to pick one action of a pending choice. The engine
//! only consults an agent when a choice has two or more actions; forced
//! choices are applied without asking.
//!
//! ## Implementations
//!
//! - [`RandomAgent`]: uniform random play, also the rollout policy of the searches
//! - [`DuelAgent`]: routes each choice to the agent of the player it belongs to
//! - [`TerminalAgent`]: a human at a text terminal
//! - [`ChannelAgent`]: a human behind another thread (GUI or network front end)
//! - the search agents in [`crate::search`] and [`crate::mcts`]

pub mod channel;
pub mod duel;
pub mod random;
pub mod terminal;

pub use channel::{ChannelAgent, ChannelHandle, Prompt};
pub use duel::DuelAgent;
pub use random::RandomAgent;
pub use terminal::TerminalAgent;

use crate::choice::{Action, Choice};
use crate::core::GameState;

/// Anything that can answer choices.
pub trait Agent {
    /// Game narration ("Player 1: Pass", final scores).
    fn message(&mut self, text: &str) {
        log::info!("{text}");
    }

    /// Index into `actions` of the action to take.
    ///
    /// `actions` holds at least two entries. An out-of-range answer makes
    /// the driver ask again a bounded number of times.
    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn message(&mut self, text: &str) {
        (**self).message(text);
    }

    fn choose_action(&mut self, state: &GameState, choice: &Choice, actions: &[Action]) -> usize {
        (**self).choose_action(state, choice, actions)
    }
}
