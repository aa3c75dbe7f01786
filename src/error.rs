//! Error types for the Gods engine.
//!
//! Rule violations inside the engine (stale card addresses, impossible
//! plays) are bugs and panic. Everything that depends on outside input
//! (card files, agents, snapshots) returns [`GodsError`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GodsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid card data: {0}")]
    CardData(#[from] serde_json::Error),

    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Not enough {kind} cards: need {needed}, have {available}")]
    NotEnoughCards {
        kind: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("Selection {index} out of range for {options} options")]
    InvalidSelection { index: usize, options: usize },

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, GodsError>;
