//! Wonders: cards that stay in play.
//!
//! ○ in the rules text below is the wonder's effective power.

use super::{owner_of, zone_where};
use crate::cards::behavior::CardBehavior;
use crate::cards::definition::{CardColor, CardType};
use crate::cards::power::{effective_power, power_at_depth};
use crate::choice::{Choice, ChoiceKind};
use crate::core::{EntityId, GameState, PlayerId};
use crate::rules::{draw_card, scoring};
use crate::zones::{CardId, Location, Zone};

/// When you declare the end, you may play a card with power ○ or less.
pub const LIGHT: CardBehavior = CardBehavior {
    on_end_declared: Some(light_on_end_declared),
    ..CardBehavior::NONE
};

/// At the end of your turn, draw until you hold more than ○ cards.
pub const MOON: CardBehavior = CardBehavior {
    on_turn_end: Some(moon_on_turn_end),
    ..CardBehavior::NONE
};

/// When you pass, you may destroy a People with power ○ or less.
pub const WAR: CardBehavior = CardBehavior {
    on_pass: Some(war_on_pass),
    ..CardBehavior::NONE
};

/// When you pass, you may restore a People.
pub const RIVERS: CardBehavior = CardBehavior {
    on_pass: Some(rivers_on_pass),
    ..CardBehavior::NONE
};

/// When you pass, you may play a card with power ○ or less.
pub const WISDOM: CardBehavior = CardBehavior {
    on_pass: Some(wisdom_on_pass),
    ..CardBehavior::NONE
};

/// Opponent's events get -○, down to a minimum of 1.
pub const KNOWLEDGE: CardBehavior = CardBehavior {
    power_modifier: Some(knowledge_modifier),
    ..CardBehavior::NONE
};

/// Your other blue wonders get +○.
pub const SKY: CardBehavior = CardBehavior {
    power_modifier: Some(sky_modifier),
    ..CardBehavior::NONE
};

/// Your other green wonders get +○.
pub const SUN: CardBehavior = CardBehavior {
    power_modifier: Some(sun_modifier),
    ..CardBehavior::NONE
};

/// Your red events get +○.
pub const FIRE: CardBehavior = CardBehavior {
    power_modifier: Some(fire_modifier),
    ..CardBehavior::NONE
};

/// You score your destroyed Peoples with power ○ or less.
pub const DESERTS: CardBehavior = CardBehavior {
    on_scoring_people: Some(deserts_scoring),
    ..CardBehavior::NONE
};

/// When you pass, you may restore a People with power ○ or less.
pub const FORESTS: CardBehavior = CardBehavior {
    on_pass: Some(forests_on_pass),
    ..CardBehavior::NONE
};

/// Your Peoples with power ○ or less are indestructible.
pub const MOUNTAINS: CardBehavior = CardBehavior {
    is_indestructible: Some(mountains_protects),
    ..CardBehavior::NONE
};

/// Worth ○ points at the end of the game.
pub const ANIMALS: CardBehavior = CardBehavior {
    on_scoring: Some(animals_scoring),
    ..CardBehavior::NONE
};

/// Your Peoples are worth ○ extra points.
pub const LOVE: CardBehavior = CardBehavior {
    on_scoring_people: Some(love_scoring),
    ..CardBehavior::NONE
};

/// Your undestroyed Peoples with power ○ or less are worth +1.
pub const SEAS: CardBehavior = CardBehavior {
    on_scoring_people: Some(seas_scoring),
    ..CardBehavior::NONE
};

/// When you draw, you may draw from the shared deck instead; that card has power ○.
pub const STARS: CardBehavior = CardBehavior {
    on_draw_replacement: Some(stars_replacement),
    ..CardBehavior::NONE
};

// =============================================================================
// Triggered wonders
// =============================================================================

fn light_on_end_declared(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    vec![Choice::new(owner_of(state, me), ChoiceKind::PlayWithinPower { source: me })]
}

/// Hand cards Light lets its owner play.
pub(crate) fn light_targets(state: &GameState, light: EntityId) -> Vec<CardId> {
    let cap = effective_power(state, light);
    zone_where(state, Zone::Hand, owner_of(state, light), |state, card| {
        effective_power(state, card) <= cap
    })
}

fn moon_on_turn_end(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let owner = owner_of(state, me);
    while state.player(owner).hand.len() as i32 <= effective_power(state, me) {
        if state.draw_top(owner).is_none() {
            break;
        }
    }
    Vec::new()
}

fn war_on_pass(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    if state.current_player != owner_of(state, me) {
        return Vec::new();
    }
    vec![Choice::new(
        state.current_player,
        ChoiceKind::DestroyPeople { source: me, optional: true },
    )]
}

fn rivers_on_pass(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    vec![Choice::new(
        state.current_player,
        ChoiceKind::RestorePeople { source: me, capped: false, optional: true },
    )]
}

fn forests_on_pass(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let owner = owner_of(state, me);
    if state.current_player != owner {
        return Vec::new();
    }
    vec![Choice::new(
        owner,
        ChoiceKind::RestorePeople { source: me, capped: true, optional: true },
    )]
}

fn wisdom_on_pass(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let owner = owner_of(state, me);
    if state.current_player != owner {
        return Vec::new();
    }
    vec![Choice::new(owner, ChoiceKind::PlayOnPass { source: me })]
}

/// Non-People hand cards whose base power fits under Wisdom.
pub(crate) fn wisdom_targets(state: &GameState, wisdom: EntityId) -> Vec<CardId> {
    let cap = effective_power(state, wisdom);
    zone_where(state, Zone::Hand, owner_of(state, wisdom), |state, card| {
        let card = state.card(card);
        card.power <= cap && card.card_type != CardType::People
    })
}

fn stars_replacement(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let owner = owner_of(state, me);
    if state.current_player != owner || state.shared_deck.is_empty() {
        return Vec::new();
    }
    vec![Choice::new(owner, ChoiceKind::SharedDraw { source: me })]
}

/// Resolve the Stars decision: take the top shared card at ○ power, or draw normally.
pub(crate) fn resolve_stars(
    state: &mut GameState,
    stars: EntityId,
    player: PlayerId,
    shared: bool,
) -> Vec<Choice> {
    if !shared {
        return draw_card(state, player, false);
    }
    let Some(&top) = state.shared_deck.last() else {
        return draw_card(state, player, false);
    };
    let power = effective_power(state, stars);
    let card = state.card_mut(top);
    card.power = power;
    card.counters = 0;
    card.owner = Some(player);
    state.move_card(top, Location::of(Zone::Hand, player));
    log::debug!("{} draws {} from the shared deck", player, state.card(top).name);
    Vec::new()
}

// =============================================================================
// Power modifiers
// =============================================================================

fn knowledge_modifier(
    state: &GameState,
    me: EntityId,
    target: EntityId,
    power: i32,
    depth: u8,
) -> i32 {
    let card = state.card(target);
    let Some(owner) = state.card(me).owner else {
        return power;
    };
    if card.card_type == CardType::Event && card.is_in(Zone::Hand, owner.opponent()) {
        (power - power_at_depth(state, me, depth)).max(1)
    } else {
        power
    }
}

/// Shared shape of Sky and Sun: boost the owner's other wonders of `color`.
fn boost_own_wonders(
    state: &GameState,
    me: EntityId,
    target: EntityId,
    power: i32,
    depth: u8,
    color: CardColor,
) -> i32 {
    let card = state.card(target);
    match state.card(me).owner {
        Some(owner) if target != me && card.color == color && card.is_in(Zone::Wonders, owner) => {
            power + power_at_depth(state, me, depth)
        }
        _ => power,
    }
}

fn sky_modifier(state: &GameState, me: EntityId, target: EntityId, power: i32, depth: u8) -> i32 {
    boost_own_wonders(state, me, target, power, depth, CardColor::Blue)
}

fn sun_modifier(state: &GameState, me: EntityId, target: EntityId, power: i32, depth: u8) -> i32 {
    boost_own_wonders(state, me, target, power, depth, CardColor::Green)
}

fn fire_modifier(state: &GameState, me: EntityId, target: EntityId, power: i32, depth: u8) -> i32 {
    let card = state.card(target);
    match state.card(me).owner {
        Some(owner)
            if card.card_type == CardType::Event
                && card.color == CardColor::Red
                && card.is_in(Zone::Hand, owner) =>
        {
            power + power_at_depth(state, me, depth)
        }
        _ => power,
    }
}

// =============================================================================
// Scoring and immunity
// =============================================================================

fn deserts_scoring(
    state: &GameState,
    me: EntityId,
    people: EntityId,
    scorer: PlayerId,
    points: i32,
) -> i32 {
    let owner = owner_of(state, me);
    let target = state.card(people);
    if owner == scorer
        && target.destroyed
        && target.owner == Some(owner)
        && effective_power(state, people) <= effective_power(state, me)
    {
        scoring::eval_points(state, people, owner)
    } else {
        points
    }
}

fn mountains_protects(state: &GameState, me: EntityId, people: EntityId) -> bool {
    state.card(people).owner == Some(owner_of(state, me))
        && effective_power(state, people) <= effective_power(state, me)
}

fn animals_scoring(state: &GameState, me: EntityId) -> i32 {
    effective_power(state, me)
}

fn love_scoring(
    state: &GameState,
    me: EntityId,
    people: EntityId,
    scorer: PlayerId,
    points: i32,
) -> i32 {
    let owner = owner_of(state, me);
    let target = state.card(people);
    if owner == scorer && target.owner == Some(owner) && !target.destroyed {
        points + effective_power(state, me)
    } else {
        points
    }
}

fn seas_scoring(
    state: &GameState,
    me: EntityId,
    people: EntityId,
    scorer: PlayerId,
    points: i32,
) -> i32 {
    let owner = owner_of(state, me);
    let target = state.card(people);
    if owner == scorer
        && target.owner == Some(owner)
        && !target.destroyed
        && effective_power(state, people) <= effective_power(state, me)
    {
        points + 1
    } else {
        points
    }
}
