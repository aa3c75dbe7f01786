//! Card system: records, instances, identities and rules.
//!
//! ## Key Types
//!
//! - `CardRecord`: printed card data as loaded from a [`CardSource`]
//! - `Card`: one card in a game (power, counters, owner, location)
//! - `CardKind`: rules identity, mapped to a `CardBehavior` hook table
//! - `CardBehavior`: optional per-event hooks, defined in [`library`]
//!
//! ## Ownerless Cards
//!
//! People cards and the shared deck start with `owner: None`. A People's
//! owner is whoever currently satisfies its condition.

pub mod behavior;
pub mod catalog;
pub mod definition;
pub mod instance;
pub mod kind;
pub mod library;
pub mod power;

pub use behavior::CardBehavior;
pub use catalog::{BuiltinCatalog, CardIndex, CardSource, JsonCardFile};
pub use definition::{CardColor, CardRecord, CardType};
pub use instance::Card;
pub use kind::CardKind;
pub use power::effective_power;
