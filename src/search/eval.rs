//! Position evaluation for the minimax searches.
//!
//! Scores are from one player's point of view: positive is good for them.

use crate::core::{GameState, PlayerId};
use crate::rules::scoring::compute_player_score;

/// Base value of a won (or lost) finished game.
pub const WIN_SCORE: f64 = 1000.0;

/// Scores at or beyond this magnitude are decided games.
pub const DECISIVE_SCORE: f64 = 900.0;

/// Estimate of an unfinished position: point differential plus small
/// bonuses for hand, wonder and deck advantages.
#[must_use]
pub fn heuristic(state: &GameState, player: PlayerId) -> f64 {
    let opponent = player.opponent();
    let me = state.player(player);
    let them = state.player(opponent);

    let points = compute_player_score(state, player) - compute_player_score(state, opponent);
    let hand = me.hand.len() as f64 - them.hand.len() as f64;
    let wonders = me.wonders.len() as f64 - them.wonders.len() as f64;
    let deck = me.deck.len() as f64 - them.deck.len() as f64;

    points as f64 + 0.1 * hand + 0.2 * wonders + 0.05 * deck
}

/// Value of a finished game: ±[`WIN_SCORE`] plus the heuristic, with the
/// ending player losing a tie.
#[must_use]
pub fn terminal(state: &GameState, player: PlayerId) -> f64 {
    let mine = compute_player_score(state, player);
    let theirs = compute_player_score(state, player.opponent());
    let won = match mine.cmp(&theirs) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => state.ending_player != Some(player),
    };
    let base = if won { WIN_SCORE } else { -WIN_SCORE };
    base + heuristic(state, player)
}
