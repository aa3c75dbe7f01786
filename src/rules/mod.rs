//! Game rules: card operations, scoring, the turn state machine and setup.
//!
//! Card effects in [`crate::cards::library`] call into [`actions`] for every
//! structural change, so reaction hooks and ownership checks fire the same
//! way whether a change comes from the turn flow or from another card.

pub mod actions;
pub mod engine;
pub mod scoring;
pub mod setup;
pub mod turn;

pub use actions::{
    destroy_people, destroy_wonder, discard_card, draw_card, is_indestructible, play_card,
    restore_people, return_to_hand, shuffle_into_deck,
};
pub use engine::GameResult;
pub use scoring::{
    check_people_conditions, compute_player_score, evaluate_people_condition, final_result, scores,
};
pub use setup::{quick_setup, GameSetup};
pub use turn::{
    apply_action, apply_choice, get_next_choice, next_open_decision, play_out, run_game, Decision,
};
