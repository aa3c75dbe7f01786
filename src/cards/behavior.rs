//! Per-card hook tables.
//!
//! A card's rules are a [`CardBehavior`]: a table of optional function
//! pointers, one per engine event. A missing hook is a no-op. Tables are
//! `const` items built with struct update syntax from [`CardBehavior::NONE`],
//! so a card only names the hooks it uses:
//!
//! ```ignore
//! pub const ANIMALS: CardBehavior = CardBehavior {
//!     on_scoring: Some(animals_scoring),
//!     ..CardBehavior::NONE
//! };
//! ```
//!
//! ## Hook shapes
//!
//! - Hooks that may need a decision return `Vec<Choice>`; the engine appends
//!   them to the pending queue.
//! - Unconditional hooks mutate the state directly.
//! - Query hooks (`power_modifier`, scoring, immunity) take `&GameState` and
//!   are recomputed on every call.
//!
//! The first `EntityId` argument is always the card that owns the hook.

use crate::choice::Choice;
use crate::core::{EntityId, GameState, PlayerId};

/// Hook that may spawn follow-up decisions.
pub type ChoiceHook = fn(&mut GameState, EntityId) -> Vec<Choice>;

/// Hook reacting to something happening to another card.
pub type CardEventHook = fn(&mut GameState, EntityId, EntityId);

/// Hook reacting to something happening to the card itself.
pub type SelfEventHook = fn(&mut GameState, EntityId);

/// `(state, wonder, target, power so far, modifier depth) -> new power`.
pub type PowerModifier = fn(&GameState, EntityId, EntityId, i32, u8) -> i32;

/// People condition: points `player` would score with this People.
pub type PointsHook = fn(&GameState, EntityId, PlayerId) -> i32;

/// Flat points a wonder adds to its owner's score.
pub type ScoringHook = fn(&GameState, EntityId) -> i32;

/// `(state, wonder, people, scoring player, points so far) -> adjusted points`.
pub type PeopleScoringHook = fn(&GameState, EntityId, EntityId, PlayerId, i32) -> i32;

/// Predicate over a People card.
pub type PeopleTest = fn(&GameState, EntityId, EntityId) -> bool;

/// Hook table for one card identity.
#[derive(Clone, Copy)]
pub struct CardBehavior {
    pub on_played: Option<ChoiceHook>,
    /// Runs before a draw; returning choices redirects the draw into them.
    pub on_draw_replacement: Option<ChoiceHook>,
    /// Runs before a draw after replacements; returning choices takes over the draw.
    pub on_draw: Option<ChoiceHook>,
    pub on_pass: Option<ChoiceHook>,
    pub on_turn_start: Option<ChoiceHook>,
    pub on_turn_end: Option<ChoiceHook>,
    pub on_end_declared: Option<ChoiceHook>,
    pub on_discard: Option<CardEventHook>,
    pub on_destroy: Option<CardEventHook>,
    pub on_destroyed: Option<SelfEventHook>,
    pub power_modifier: Option<PowerModifier>,
    pub eval_points: Option<PointsHook>,
    pub on_scoring: Option<ScoringHook>,
    pub on_scoring_people: Option<PeopleScoringHook>,
    pub wins_tie: Option<PeopleTest>,
    pub is_indestructible: Option<PeopleTest>,
}

impl CardBehavior {
    /// A card with no rules.
    pub const NONE: CardBehavior = CardBehavior {
        on_played: None,
        on_draw_replacement: None,
        on_draw: None,
        on_pass: None,
        on_turn_start: None,
        on_turn_end: None,
        on_end_declared: None,
        on_discard: None,
        on_destroy: None,
        on_destroyed: None,
        power_modifier: None,
        eval_points: None,
        on_scoring: None,
        on_scoring_people: None,
        wins_tie: None,
        is_indestructible: None,
    };
}

impl std::fmt::Debug for CardBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hooks: Vec<&str> = [
            ("on_played", self.on_played.is_some()),
            ("on_draw_replacement", self.on_draw_replacement.is_some()),
            ("on_draw", self.on_draw.is_some()),
            ("on_pass", self.on_pass.is_some()),
            ("on_turn_start", self.on_turn_start.is_some()),
            ("on_turn_end", self.on_turn_end.is_some()),
            ("on_end_declared", self.on_end_declared.is_some()),
            ("on_discard", self.on_discard.is_some()),
            ("on_destroy", self.on_destroy.is_some()),
            ("on_destroyed", self.on_destroyed.is_some()),
            ("power_modifier", self.power_modifier.is_some()),
            ("eval_points", self.eval_points.is_some()),
            ("on_scoring", self.on_scoring.is_some()),
            ("on_scoring_people", self.on_scoring_people.is_some()),
            ("wins_tie", self.wins_tie.is_some()),
            ("is_indestructible", self.is_indestructible.is_some()),
        ]
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| name)
        .collect();
        f.debug_struct("CardBehavior").field("hooks", &hooks).finish()
    }
}

// =============================================================================
// Dispatch helpers
// =============================================================================

/// Run a choice hook of `card`, if it has one.
pub fn fire(
    state: &mut GameState,
    card: EntityId,
    hook: impl Fn(&CardBehavior) -> Option<ChoiceHook>,
) -> Vec<Choice> {
    let selected = hook(state.card(card).behavior());
    match selected {
        Some(f) => f(state, card),
        None => Vec::new(),
    }
}

/// Run a choice hook on each card in `cards`, concatenating the follow-ups.
pub fn fire_all(
    state: &mut GameState,
    cards: &[EntityId],
    hook: impl Fn(&CardBehavior) -> Option<ChoiceHook> + Copy,
) -> Vec<Choice> {
    let mut choices = Vec::new();
    for &card in cards {
        choices.extend(fire(state, card, hook));
    }
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_debug_lists_no_hooks() {
        let text = format!("{:?}", CardBehavior::NONE);
        assert_eq!(text, "CardBehavior { hooks: [] }");
    }

    #[test]
    fn test_struct_update_keeps_defaults() {
        fn points(_: &GameState, _: EntityId) -> i32 {
            4
        }
        let behavior = CardBehavior {
            on_scoring: Some(points),
            ..CardBehavior::NONE
        };
        assert!(behavior.on_scoring.is_some());
        assert!(behavior.on_pass.is_none());
        assert!(format!("{behavior:?}").contains("on_scoring"));
    }
}
