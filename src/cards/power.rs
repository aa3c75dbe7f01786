//! Effective power.
//!
//! A card's effective power is its base power plus counters, passed through
//! the `power_modifier` of every wonder in play (player 0's wonders first,
//! each player's wonders in play order), floored at 0.
//!
//! Modifiers read the power of their own wonder, which can itself be
//! modified (two Skies boosting each other). Each nested lookup carries a
//! depth; past [`MAX_MODIFIER_DEPTH`] modifiers are no longer applied, which
//! bounds otherwise unbounded mutual recursion.

use crate::core::{EntityId, GameState, PlayerId};

/// Nesting limit for modifier lookups.
pub const MAX_MODIFIER_DEPTH: u8 = 4;

/// Effective power of `card`, never negative.
#[must_use]
pub fn effective_power(state: &GameState, card: EntityId) -> i32 {
    power_at_depth(state, card, 0)
}

/// Effective power computed from inside a modifier at `depth`.
#[must_use]
pub fn power_at_depth(state: &GameState, card: EntityId, depth: u8) -> i32 {
    let instance = state.card(card);
    let mut power = instance.power + instance.counters;

    if depth < MAX_MODIFIER_DEPTH {
        for player in PlayerId::all() {
            for &wonder in state.player(player).wonders.iter() {
                if let Some(modifier) = state.card(wonder).behavior().power_modifier {
                    power = modifier(state, wonder, card, power, depth + 1);
                }
            }
        }
    }

    power.max(0)
}
