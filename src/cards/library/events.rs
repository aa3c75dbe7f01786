//! Events: one-shot cards resolved when played.
//!
//! Events run from the discard pile (a played event is discarded before its
//! effect runs), so power modifiers that only apply in hand are gone by the
//! time ○ is read.

use super::{
    counter_people_targets, destroyable_people, owner_of, restorable_people, wonders_where,
    zone_where,
};
use crate::cards::behavior::CardBehavior;
use crate::cards::definition::{CardColor, CardType};
use crate::cards::power::effective_power;
use crate::choice::combinations::{combinations, SelectionMode};
use crate::choice::{Action, Choice, ChoiceKind};
use crate::core::{EntityId, GameState, PlayerId};
use crate::rules::{destroy_people, draw_card, play_card};
use crate::zones::{CardId, Zone};

/// Destroy every People with power ○ or less.
pub const EARTHQUAKE: CardBehavior = CardBehavior {
    on_played: Some(earthquake_played),
    ..CardBehavior::NONE
};

/// Shuffle up to ○ blue wonders with power ○ or less into their owners' decks.
pub const ERUPTION: CardBehavior = CardBehavior {
    on_played: Some(eruption_played),
    ..CardBehavior::NONE
};

/// Destroy every People your opponent controls with power ○ or less.
pub const METEORITE: CardBehavior = CardBehavior {
    on_played: Some(meteorite_played),
    ..CardBehavior::NONE
};

/// Play an event from your hand with +○ counters.
pub const MIRACLE: CardBehavior = CardBehavior {
    on_played: Some(miracle_played),
    ..CardBehavior::NONE
};

/// Return up to ○ events from your discard to your hand.
pub const FLASHBACK: CardBehavior = CardBehavior {
    on_played: Some(flashback_played),
    ..CardBehavior::NONE
};

/// Play up to ○ extra cards.
pub const PROPHECY: CardBehavior = CardBehavior {
    on_played: Some(prophecy_played),
    ..CardBehavior::NONE
};

/// Return up to ○ wonders in play to their owners' hands.
pub const TIME_WARP: CardBehavior = CardBehavior {
    on_played: Some(time_warp_played),
    ..CardBehavior::NONE
};

/// Draw ○ cards.
pub const AURORA: CardBehavior = CardBehavior {
    on_played: Some(aurora_played),
    ..CardBehavior::NONE
};

/// Your opponent discards ○ cards of their choice.
pub const DARKNESS: CardBehavior = CardBehavior {
    on_played: Some(darkness_played),
    ..CardBehavior::NONE
};

/// Put ○ +1 counters on an undestroyed People.
pub const SPRING: CardBehavior = CardBehavior {
    on_played: Some(spring_played),
    ..CardBehavior::NONE
};

/// Restore a People with power ○ or less.
pub const REGROWTH: CardBehavior = CardBehavior {
    on_played: Some(regrowth_played),
    ..CardBehavior::NONE
};

/// Put ○ -1 counters on every People.
pub const FLOOD: CardBehavior = CardBehavior {
    on_played: Some(flood_played),
    ..CardBehavior::NONE
};

/// Put ○ +1 counters on a People.
pub const FORGIVE: CardBehavior = CardBehavior {
    on_played: Some(forgive_played),
    ..CardBehavior::NONE
};

/// Destroy a wonder with power ○ or less.
pub const UNMAKING: CardBehavior = CardBehavior {
    on_played: Some(unmaking_played),
    ..CardBehavior::NONE
};

/// Destroy a People with power ○ or less.
pub const REVOLT: CardBehavior = CardBehavior {
    on_played: Some(revolt_played),
    ..CardBehavior::NONE
};

/// Put ○ +1 counters on a wonder.
pub const BLESSING: CardBehavior = CardBehavior {
    on_played: Some(blessing_played),
    ..CardBehavior::NONE
};

/// One choice for the active player, or none when nothing could be picked.
fn ask_if(state: &GameState, any_target: bool, kind: ChoiceKind) -> Vec<Choice> {
    if any_target {
        vec![Choice::new(state.current_player, kind)]
    } else {
        Vec::new()
    }
}

fn picks(targets: Vec<CardId>, mode: SelectionMode) -> Vec<Action> {
    combinations(&targets, mode)
        .into_iter()
        .map(Action::Cards)
        .collect()
}

fn power_count(state: &GameState, card: EntityId) -> usize {
    effective_power(state, card).max(0) as usize
}

// =============================================================================
// Unconditional effects
// =============================================================================

fn earthquake_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let power = effective_power(state, me);
    let peoples: Vec<EntityId> = state.peoples.iter().copied().collect();
    for people in peoples {
        if effective_power(state, people) <= power {
            destroy_people(state, people);
        }
    }
    Vec::new()
}

fn meteorite_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let power = effective_power(state, me);
    let victim = state.current_player.opponent();
    let targets: Vec<EntityId> = state
        .peoples
        .iter()
        .copied()
        .filter(|&people| {
            let card = state.card(people);
            card.owner == Some(victim) && !card.destroyed && effective_power(state, people) <= power
        })
        .collect();
    for people in targets {
        destroy_people(state, people);
    }
    Vec::new()
}

fn aurora_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let player = state.current_player;
    let mut choices = Vec::new();
    for _ in 0..effective_power(state, me) {
        choices.extend(draw_card(state, player, true));
    }
    choices
}

fn flood_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let power = effective_power(state, me);
    let peoples: Vec<EntityId> = state.peoples.iter().copied().collect();
    for people in peoples {
        state.card_mut(people).counters -= power;
    }
    Vec::new()
}

// =============================================================================
// Single-target effects
// =============================================================================

fn spring_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !counter_people_targets(state, true).is_empty();
    ask_if(state, any, ChoiceKind::CounterPeople { source: me, undestroyed_only: true })
}

fn forgive_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !state.peoples.is_empty();
    ask_if(state, any, ChoiceKind::CounterPeople { source: me, undestroyed_only: false })
}

fn regrowth_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !restorable_people(state, me, true).is_empty();
    ask_if(
        state,
        any,
        ChoiceKind::RestorePeople { source: me, capped: true, optional: false },
    )
}

fn revolt_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !destroyable_people(state, me).is_empty();
    ask_if(state, any, ChoiceKind::DestroyPeople { source: me, optional: false })
}

fn blessing_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !state.all_wonders().is_empty();
    ask_if(state, any, ChoiceKind::CounterWonder { source: me })
}

fn unmaking_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !unmaking_targets(state, me).is_empty();
    ask_if(state, any, ChoiceKind::DestroyWonder { source: me })
}

/// Wonders Unmaking can destroy.
pub(crate) fn unmaking_targets(state: &GameState, unmaking: EntityId) -> Vec<CardId> {
    let cap = effective_power(state, unmaking);
    wonders_where(state, |state, wonder| effective_power(state, wonder) <= cap)
}

fn miracle_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !miracle_targets(state, state.current_player).is_empty();
    ask_if(state, any, ChoiceKind::PlayEmpowered { source: me })
}

/// Events in `player`'s hand.
pub(crate) fn miracle_targets(state: &GameState, player: PlayerId) -> Vec<CardId> {
    zone_where(state, Zone::Hand, player, |state, card| state.card(card).is_event())
}

/// Play the chosen event with Miracle's power added as counters.
///
/// The counters stay on the event until it returns to a hand or deck, so
/// choices the event spawns still see the boosted power.
pub(crate) fn resolve_miracle(
    state: &mut GameState,
    miracle: EntityId,
    player: PlayerId,
    target: CardId,
) -> Vec<Choice> {
    let event = state.resolve(target);
    let bonus = effective_power(state, miracle);
    state.card_mut(event).counters += bonus;
    play_card(state, event, player)
}

fn prophecy_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let remaining = effective_power(state, me);
    if remaining <= 0 {
        return Vec::new();
    }
    vec![Choice::new(
        owner_of(state, me),
        ChoiceKind::PlayExtra { source: me, remaining: remaining as u32 },
    )]
}

/// Cards Prophecy can play: the owner's whole hand.
pub(crate) fn prophecy_targets(state: &GameState, prophecy: EntityId) -> Vec<CardId> {
    state.zone_ids(Zone::Hand, owner_of(state, prophecy))
}

/// Play one card for Prophecy and offer the next one while plays remain.
pub(crate) fn resolve_prophecy(
    state: &mut GameState,
    prophecy: EntityId,
    remaining: u32,
    player: PlayerId,
    target: CardId,
) -> Vec<Choice> {
    let card = state.resolve(target);
    let mut follow_ups = play_card(state, card, player);
    if remaining > 1 {
        follow_ups.push(Choice::new(
            player,
            ChoiceKind::PlayExtra { source: prophecy, remaining: remaining - 1 },
        ));
    }
    follow_ups
}

// =============================================================================
// Multi-target effects
// =============================================================================

fn eruption_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !eruption_targets(state, me).is_empty() && effective_power(state, me) > 0;
    ask_if(state, any, ChoiceKind::ShuffleWonders { source: me })
}

fn eruption_targets(state: &GameState, eruption: EntityId) -> Vec<CardId> {
    let cap = effective_power(state, eruption);
    wonders_where(state, |state, wonder| {
        state.card(wonder).color == CardColor::Blue && effective_power(state, wonder) <= cap
    })
}

pub(crate) fn eruption_picks(state: &GameState, eruption: EntityId) -> Vec<Action> {
    let count = power_count(state, eruption);
    picks(eruption_targets(state, eruption), SelectionMode::UpTo(count))
}

fn flashback_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let player = state.current_player;
    let any = !flashback_targets(state, player).is_empty() && effective_power(state, me) > 0;
    ask_if(state, any, ChoiceKind::RecallEvents { source: me })
}

fn flashback_targets(state: &GameState, player: PlayerId) -> Vec<CardId> {
    zone_where(state, Zone::Discard, player, |state, card| {
        state.card(card).card_type == CardType::Event
    })
}

pub(crate) fn flashback_picks(state: &GameState, flashback: EntityId, player: PlayerId) -> Vec<Action> {
    let count = power_count(state, flashback);
    picks(flashback_targets(state, player), SelectionMode::UpTo(count))
}

fn time_warp_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let any = !state.all_wonders().is_empty() && effective_power(state, me) > 0;
    ask_if(state, any, ChoiceKind::RecallWonders { source: me })
}

pub(crate) fn time_warp_picks(state: &GameState, time_warp: EntityId) -> Vec<Action> {
    let count = power_count(state, time_warp);
    picks(wonders_where(state, |_, _| true), SelectionMode::UpTo(count))
}

fn darkness_played(state: &mut GameState, me: EntityId) -> Vec<Choice> {
    let victim = owner_of(state, me).opponent();
    if state.player(victim).hand.is_empty() || effective_power(state, me) <= 0 {
        return Vec::new();
    }
    vec![Choice::new(victim, ChoiceKind::DiscardCards { source: me })]
}

/// Ways for the victim of Darkness to discard exactly ○ cards.
pub(crate) fn darkness_picks(state: &GameState, darkness: EntityId, victim: PlayerId) -> Vec<Action> {
    let count = power_count(state, darkness);
    picks(state.zone_ids(Zone::Hand, victim), SelectionMode::Exactly(count))
}
