//! Peoples: scoring cards in the shared pool.
//!
//! A People scores its effective power for the player who strictly beats
//! the opponent on its condition, and nothing for anyone else.

use crate::cards::behavior::CardBehavior;
use crate::cards::definition::CardColor;
use crate::cards::power::effective_power;
use crate::core::{EntityId, GameState, PlayerId};

/// Most total power among green wonders.
pub const EGYPTIANS: CardBehavior = CardBehavior {
    eval_points: Some(egyptians_points),
    ..CardBehavior::NONE
};

/// Twice or more cards in hand than the opponent (who holds at least one).
pub const GREEKS: CardBehavior = CardBehavior {
    eval_points: Some(greeks_points),
    ..CardBehavior::NONE
};

/// Most cards in deck.
pub const VIKINGS: CardBehavior = CardBehavior {
    eval_points: Some(vikings_points),
    ..CardBehavior::NONE
};

/// Most wonders in play.
pub const MINOANS: CardBehavior = CardBehavior {
    eval_points: Some(minoans_points),
    ..CardBehavior::NONE
};

/// Most total power among wonders.
pub const BABYLONIANS: CardBehavior = CardBehavior {
    eval_points: Some(babylonians_points),
    ..CardBehavior::NONE
};

/// Most total power among red wonders.
pub const ROMANS: CardBehavior = CardBehavior {
    eval_points: Some(romans_points),
    ..CardBehavior::NONE
};

/// Most total power among blue wonders.
pub const JUDEANS: CardBehavior = CardBehavior {
    eval_points: Some(judeans_points),
    ..CardBehavior::NONE
};

/// Score `me` for `player` if they strictly lead on `metric`.
fn if_leading(
    state: &GameState,
    me: EntityId,
    player: PlayerId,
    metric: impl Fn(&GameState, PlayerId) -> i32,
) -> i32 {
    if metric(state, player) > metric(state, player.opponent()) {
        effective_power(state, me)
    } else {
        0
    }
}

fn wonder_power(state: &GameState, player: PlayerId, color: Option<CardColor>) -> i32 {
    state
        .player(player)
        .wonders
        .iter()
        .filter(|&&wonder| color.map_or(true, |color| state.card(wonder).color == color))
        .map(|&wonder| effective_power(state, wonder))
        .sum()
}

fn egyptians_points(state: &GameState, me: EntityId, player: PlayerId) -> i32 {
    if_leading(state, me, player, |state, p| wonder_power(state, p, Some(CardColor::Green)))
}

fn greeks_points(state: &GameState, me: EntityId, player: PlayerId) -> i32 {
    let mine = state.player(player).hand.len();
    let theirs = state.player(player.opponent()).hand.len();
    if theirs > 0 && mine >= 2 * theirs {
        effective_power(state, me)
    } else {
        0
    }
}

fn vikings_points(state: &GameState, me: EntityId, player: PlayerId) -> i32 {
    if_leading(state, me, player, |state, p| state.player(p).deck.len() as i32)
}

fn minoans_points(state: &GameState, me: EntityId, player: PlayerId) -> i32 {
    if_leading(state, me, player, |state, p| state.player(p).wonders.len() as i32)
}

fn babylonians_points(state: &GameState, me: EntityId, player: PlayerId) -> i32 {
    if_leading(state, me, player, |state, p| wonder_power(state, p, None))
}

fn romans_points(state: &GameState, me: EntityId, player: PlayerId) -> i32 {
    if_leading(state, me, player, |state, p| wonder_power(state, p, Some(CardColor::Red)))
}

fn judeans_points(state: &GameState, me: EntityId, player: PlayerId) -> i32 {
    if_leading(state, me, player, |state, p| wonder_power(state, p, Some(CardColor::Blue)))
}
