//! Rules of every known card.
//!
//! Each card identity gets a `const` [`CardBehavior`](super::CardBehavior)
//! table in the module for its type. The helpers here are the target
//! queries several cards share.

pub mod events;
pub mod peoples;
pub mod wonders;

use crate::cards::power::effective_power;
use crate::core::{EntityId, GameState, PlayerId};
use crate::zones::{CardId, Zone};

/// Owner of a card, falling back to the active player for unowned cards.
pub(crate) fn owner_of(state: &GameState, card: EntityId) -> PlayerId {
    state.card(card).owner.unwrap_or(state.current_player)
}

/// Addresses of People cards matching `keep`, in pool order.
pub(crate) fn people_where(
    state: &GameState,
    keep: impl Fn(&GameState, EntityId) -> bool,
) -> Vec<CardId> {
    state
        .peoples
        .iter()
        .enumerate()
        .filter(|(_, &people)| keep(state, people))
        .map(|(index, &people)| CardId::people(index, state.card(people).owner))
        .collect()
}

/// Addresses of wonders in play matching `keep`, player 0's first.
pub(crate) fn wonders_where(
    state: &GameState,
    keep: impl Fn(&GameState, EntityId) -> bool,
) -> Vec<CardId> {
    PlayerId::all()
        .flat_map(|player| {
            state
                .player(player)
                .wonders
                .iter()
                .enumerate()
                .filter(|(_, &wonder)| keep(state, wonder))
                .map(move |(index, _)| CardId::in_zone(Zone::Wonders, index, player))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Addresses of cards in one player zone matching `keep`.
pub(crate) fn zone_where(
    state: &GameState,
    zone: Zone,
    player: PlayerId,
    keep: impl Fn(&GameState, EntityId) -> bool,
) -> Vec<CardId> {
    state
        .player(player)
        .zone(zone)
        .iter()
        .enumerate()
        .filter(|(_, &card)| keep(state, card))
        .map(|(index, _)| CardId::in_zone(zone, index, player))
        .collect()
}

/// Undestroyed People with power up to `source`'s (War, Revolt).
pub(crate) fn destroyable_people(state: &GameState, source: EntityId) -> Vec<CardId> {
    let cap = effective_power(state, source);
    people_where(state, |state, people| {
        !state.card(people).destroyed && effective_power(state, people) <= cap
    })
}

/// Destroyed People, optionally with power up to `source`'s (Rivers, Forests, Regrowth).
pub(crate) fn restorable_people(state: &GameState, source: EntityId, capped: bool) -> Vec<CardId> {
    let cap = effective_power(state, source);
    people_where(state, |state, people| {
        state.card(people).destroyed && (!capped || effective_power(state, people) <= cap)
    })
}

/// People that can take counters (Spring, Forgive).
pub(crate) fn counter_people_targets(state: &GameState, undestroyed_only: bool) -> Vec<CardId> {
    people_where(state, |state, people| {
        !undestroyed_only || !state.card(people).destroyed
    })
}

/// Every wonder in play.
pub(crate) fn any_wonder(state: &GameState) -> Vec<CardId> {
    wonders_where(state, |_, _| true)
}

/// Put `source`'s power worth of +1 counters on the addressed card.
pub(crate) fn add_counters(state: &mut GameState, source: EntityId, target: CardId) {
    let target = state.resolve(target);
    let amount = effective_power(state, source);
    state.card_mut(target).counters += amount;
}
