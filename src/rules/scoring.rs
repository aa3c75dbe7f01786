//! People ownership and scores.
//!
//! Ownership of a People card is derived, never stored as a decision: it is
//! recomputed from the current table after every structural change by
//! [`check_people_conditions`].

use crate::core::{EntityId, GameState, PlayerId};

use super::engine::GameResult;

/// Points `player` would score with `people` under its condition.
#[must_use]
pub fn eval_points(state: &GameState, people: EntityId, player: PlayerId) -> i32 {
    match state.card(people).behavior().eval_points {
        Some(points) => points(state, people, player),
        None => 0,
    }
}

/// Who controls `people` right now.
///
/// The strictly higher positive scorer controls it. On an exact positive
/// tie, the first wonder in play (player 0's first) whose `wins_tie` hook
/// claims it decides; otherwise nobody does.
#[must_use]
pub fn evaluate_people_condition(state: &GameState, people: EntityId) -> Option<PlayerId> {
    let first = eval_points(state, people, PlayerId::ZERO);
    let second = eval_points(state, people, PlayerId::ONE);
    decide_owner(first, second, || tie_claimant(state, people))
}

/// Owner from both players' condition points; `claimant` is only consulted
/// on a positive tie.
fn decide_owner(
    first: i32,
    second: i32,
    claimant: impl FnOnce() -> Option<PlayerId>,
) -> Option<PlayerId> {
    if first > second && first > 0 {
        Some(PlayerId::ZERO)
    } else if second > first && second > 0 {
        Some(PlayerId::ONE)
    } else if first == second && first > 0 {
        claimant()
    } else {
        None
    }
}

/// Holder of the first wonder in play whose `wins_tie` hook claims `people`.
fn tie_claimant(state: &GameState, people: EntityId) -> Option<PlayerId> {
    PlayerId::all().find(|&player| {
        state.player(player).wonders.iter().any(|&wonder| {
            state
                .card(wonder)
                .behavior()
                .wins_tie
                .map_or(false, |wins| wins(state, wonder, people))
        })
    })
}

/// Reassign every People card's controller.
///
/// All owners are computed against the same table before any is written.
pub fn check_people_conditions(state: &mut GameState) {
    let owners: Vec<(EntityId, Option<PlayerId>)> = state
        .peoples
        .iter()
        .map(|&people| (people, evaluate_people_condition(state, people)))
        .collect();
    for (people, owner) in owners {
        let card = state.card_mut(people);
        if card.owner != owner {
            log::trace!("{} now controlled by {:?}", card.name, owner);
            card.owner = owner;
        }
    }
}

/// Total score of `player`.
///
/// Each People is worth its condition points (0 when destroyed), adjusted by
/// every wonder's `on_scoring_people`; the player's own wonders add their
/// `on_scoring` points.
#[must_use]
pub fn compute_player_score(state: &GameState, player: PlayerId) -> i32 {
    let wonders = state.all_wonders();
    let mut total = 0;

    for &people in state.peoples.iter() {
        let mut points = if state.card(people).destroyed {
            0
        } else {
            eval_points(state, people, player)
        };
        for &wonder in &wonders {
            if let Some(adjust) = state.card(wonder).behavior().on_scoring_people {
                points = adjust(state, wonder, people, player, points);
            }
        }
        total += points;
    }

    for &wonder in state.player(player).wonders.iter() {
        if let Some(score) = state.card(wonder).behavior().on_scoring {
            total += score(state, wonder);
        }
    }
    total
}

/// Scores of both players, indexed by player.
#[must_use]
pub fn scores(state: &GameState) -> [i32; 2] {
    [
        compute_player_score(state, PlayerId::ZERO),
        compute_player_score(state, PlayerId::ONE),
    ]
}

/// Outcome of a finished (or abandoned) game from its current scores.
///
/// On a tie the ending player loses; with no ending player it is a draw.
#[must_use]
pub fn final_result(state: &GameState) -> GameResult {
    let [first, second] = scores(state);
    if first > second {
        GameResult::Winner(PlayerId::ZERO)
    } else if second > first {
        GameResult::Winner(PlayerId::ONE)
    } else {
        match state.ending_player {
            Some(ender) => GameResult::Winner(ender.opponent()),
            None => GameResult::Draw,
        }
    }
}
