//! Stable card identification.
//!
//! Every card instance in a game lives in the card arena of `GameState` and
//! is addressed by an `EntityId`, its slot in that arena.
//!
//! ## Stability
//!
//! An `EntityId` is assigned once when the game is set up and is never reused
//! or invalidated: moving a card between zones changes where it is listed,
//! not its id. That makes it the right handle for anything that must survive
//! a mutation (a card effect remembering its source, a remote peer
//! highlighting a card).
//!
//! Contrast with [`CardId`](crate::zones::CardId), which is a transient
//! structural address that goes stale as soon as its zone changes.
//!
//! ```
//! use gods_engine::core::EntityId;
//!
//! let sun = EntityId(7);
//! assert_eq!(sun.index(), 7);
//! assert_eq!(format!("{}", sun), "Card#7");
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier of a card instance (its slot in the card arena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an id from an arena slot.
    #[must_use]
    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    /// Arena slot as a `usize` index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw id value (the number shown to front ends).
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
