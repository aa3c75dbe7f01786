//! Structural card operations: play, draw, discard, destroy, restore, move.
//!
//! These are the only places that fire per-card reaction hooks. Every
//! operation takes stable [`EntityId`]s; callers resolve transient addresses
//! first.

use crate::cards::behavior::fire_all;
use crate::cards::CardType;
use crate::choice::Choice;
use crate::core::{EntityId, GameState, PlayerId};
use crate::zones::{Location, Zone};

use super::scoring::check_people_conditions;

/// Put a card from hand into play on behalf of `player`.
///
/// Wonders enter `player`'s wonders; events go to the discard first and then
/// resolve. Ownership of the People is re-evaluated afterwards.
pub fn play_card(state: &mut GameState, card: EntityId, player: PlayerId) -> Vec<Choice> {
    log::debug!("{} plays {}", player, state.card(card).name);
    match state.card(card).card_type {
        CardType::Wonder => {
            state.card_mut(card).owner = Some(player);
            state.move_card(card, Location::of(Zone::Wonders, player));
        }
        CardType::Event => {
            state.move_card(card, Location::of(Zone::Discard, player));
        }
        CardType::People => panic!("People cards cannot be played: {}", state.card(card).name),
    }
    let follow_ups = match state.card(card).behavior().on_played {
        Some(hook) => hook(state, card),
        None => Vec::new(),
    };
    check_people_conditions(state);
    follow_ups
}

/// Draw one card for `player`.
///
/// Does nothing on an empty deck. With `replacement` set, the first of the
/// player's wonders whose `on_draw_replacement` hook returns choices takes
/// over the draw. `on_draw` hooks run next and may take it over the same
/// way; otherwise the top card moves to the hand.
pub fn draw_card(state: &mut GameState, player: PlayerId, replacement: bool) -> Vec<Choice> {
    if state.player(player).deck.is_empty() {
        return Vec::new();
    }
    let wonders = state.wonders_of(player);
    if replacement {
        for &wonder in &wonders {
            let choices = fire_all(state, &[wonder], |b| b.on_draw_replacement);
            if !choices.is_empty() {
                return choices;
            }
        }
    }
    let choices = fire_all(state, &wonders, |b| b.on_draw);
    if !choices.is_empty() {
        return choices;
    }
    if let Some(card) = state.draw_top(player) {
        log::debug!("{} draws {}", player, state.card(card).name);
    }
    Vec::new()
}

/// Move a card from its holder's hand to their discard.
pub fn discard_card(state: &mut GameState, card: EntityId) {
    let holder = holder_of(state, card);
    log::debug!("{} discards {}", holder, state.card(card).name);
    for wonder in state.wonders_of(holder) {
        if let Some(hook) = state.card(wonder).behavior().on_discard {
            hook(state, wonder, card);
        }
    }
    state.move_card(card, Location::of(Zone::Discard, holder));
}

/// Whether any wonder in play shields this People from destruction.
#[must_use]
pub fn is_indestructible(state: &GameState, people: EntityId) -> bool {
    state.all_wonders().into_iter().any(|wonder| {
        state
            .card(wonder)
            .behavior()
            .is_indestructible
            .map_or(false, |protects| protects(state, wonder, people))
    })
}

/// Mark a People destroyed, unless a wonder protects it.
pub fn destroy_people(state: &mut GameState, people: EntityId) {
    if state.card(people).destroyed {
        return;
    }
    if is_indestructible(state, people) {
        log::debug!("{} is protected", state.card(people).name);
        return;
    }
    log::debug!("{} is destroyed", state.card(people).name);
    state.card_mut(people).destroyed = true;
    announce_destroyed(state, people);
}

/// Clear a People's destroyed flag.
pub fn restore_people(state: &mut GameState, people: EntityId) {
    log::debug!("{} is restored", state.card(people).name);
    state.card_mut(people).destroyed = false;
}

/// Move a wonder from play to its holder's discard.
pub fn destroy_wonder(state: &mut GameState, wonder: EntityId) {
    let holder = holder_of(state, wonder);
    log::debug!("{}'s {} is destroyed", holder, state.card(wonder).name);
    state.move_card(wonder, Location::of(Zone::Discard, holder));
    announce_destroyed(state, wonder);
}

/// Shuffle a card into its holder's deck, clearing its counters.
pub fn shuffle_into_deck(state: &mut GameState, card: EntityId) {
    let holder = holder_of(state, card);
    log::debug!("{} is shuffled into {}'s deck", state.card(card).name, holder);
    state.card_mut(card).counters = 0;
    state.move_card(card, Location::of(Zone::Deck, holder));
    state.shuffle_deck(holder);
}

/// Move a card to `player`'s hand, clearing its counters.
pub fn return_to_hand(state: &mut GameState, card: EntityId, player: PlayerId) {
    log::debug!("{} returns to {}'s hand", state.card(card).name, player);
    state.card_mut(card).counters = 0;
    state.move_card(card, Location::of(Zone::Hand, player));
}

/// The player whose zone holds the card, or its owner for shared zones.
fn holder_of(state: &GameState, card: EntityId) -> PlayerId {
    let card = state.card(card);
    card.location()
        .player
        .or(card.owner)
        .unwrap_or(state.current_player)
}

/// Fire `on_destroyed` on the card itself, then `on_destroy` on every wonder.
fn announce_destroyed(state: &mut GameState, card: EntityId) {
    if let Some(hook) = state.card(card).behavior().on_destroyed {
        hook(state, card);
    }
    for wonder in state.wonders_by_priority() {
        if let Some(hook) = state.card(wonder).behavior().on_destroy {
            hook(state, wonder, card);
        }
    }
}
