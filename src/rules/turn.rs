//! Turn state machine.
//!
//! ## Phases
//!
//! ```text
//! start -> main -> post-play ------------------------> end -> start (next player)
//!               \-> post-pass-effects -> post-pass-draw /
//!               \-> end (declared)
//! ```
//!
//! The engine never asks an agent anything itself. It advances phases until
//! a [`Choice`] is pending and hands that out through [`get_next_choice`];
//! the caller picks an action and feeds it back with [`apply_choice`] (or
//! [`apply_action`]). Follow-up choices spawned by card effects are appended
//! to the queue, so every effect eventually resolves in FIFO order.
//!
//! [`play_out`] and [`run_game`] wrap that loop around an [`Agent`].

use crate::agents::Agent;
use crate::cards::behavior::fire_all;
use crate::choice::view::action_label;
use crate::choice::{Action, Choice, ChoiceKind, MainAction};
use crate::core::{GameState, Phase, PlayerId};
use crate::error::{GodsError, Result};

use super::actions::draw_card;
use super::engine::GameResult;
use super::scoring::{check_people_conditions, final_result, scores};

/// How often an agent may answer with an out-of-range index before the
/// driver gives up.
pub const MAX_SELECTION_ATTEMPTS: usize = 3;

/// A pending choice together with its current legal actions (never empty).
#[derive(Clone, Debug)]
pub struct Decision {
    pub choice: Choice,
    pub actions: Vec<Action>,
}

impl Decision {
    /// Whether the decision is forced and needs no agent.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.actions.len() == 1
    }
}

// =============================================================================
// Main decision
// =============================================================================

/// Options of the main decision: play (with a non-empty hand), pass, end.
#[must_use]
pub fn main_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
    let mut actions = Vec::with_capacity(3);
    if !state.player(player).hand.is_empty() {
        actions.push(Action::Main(MainAction::Play));
    }
    actions.push(Action::Main(MainAction::Pass));
    actions.push(Action::Main(MainAction::End));
    actions
}

/// Resolve the main decision.
pub fn resolve_main(state: &mut GameState, player: PlayerId, action: MainAction) -> Vec<Choice> {
    match action {
        MainAction::Play => {
            state.phase = Phase::PostPlay;
            vec![Choice::new(player, ChoiceKind::PlayFromHand)]
        }
        MainAction::Pass => {
            log::debug!("{player} passes");
            state.phase = Phase::PostPassEffects;
            let wonders = state.wonders_of(player);
            fire_all(state, &wonders, |b| b.on_pass)
        }
        MainAction::End => {
            log::debug!("{player} declares the end of the game");
            state.game_ending = true;
            state.ending_player = Some(player);
            state.phase = Phase::End;
            let wonders = state.wonders_of(player);
            fire_all(state, &wonders, |b| b.on_end_declared)
        }
    }
}

// =============================================================================
// Stepping
// =============================================================================

/// Perform exactly one phase transition.
///
/// Only called with an empty queue; any choices it spawns are queued.
pub fn step(state: &mut GameState) {
    let player = state.current_player;
    let spawned = match state.phase {
        Phase::Start => {
            state.phase = Phase::Main;
            let wonders = state.wonders_of(player);
            fire_all(state, &wonders, |b| b.on_turn_start)
        }
        Phase::Main => vec![Choice::main(player)],
        Phase::PostPlay | Phase::PostPassDraw => {
            check_people_conditions(state);
            state.phase = Phase::End;
            Vec::new()
        }
        Phase::PostPassEffects => {
            if state.player(player).deck.is_empty() {
                log::debug!("{player} passes on an empty deck; the game ends");
                state.game_over = true;
                state.ending_player = Some(player);
                Vec::new()
            } else {
                state.phase = Phase::PostPassDraw;
                draw_card(state, player, true)
            }
        }
        Phase::End => {
            let wonders = state.wonders_of(player);
            let spawned = fire_all(state, &wonders, |b| b.on_turn_end);
            state.switch_turn();
            state.phase = Phase::Start;
            spawned
        }
    };
    state.queue.extend(spawned);
}

/// Advance until a choice with at least one action is pending.
///
/// Choices without actions are dropped. Returns `None` once the game is
/// over.
pub fn get_next_choice(state: &mut GameState) -> Option<Decision> {
    loop {
        if state.game_over {
            return None;
        }
        match state.queue.pop_front() {
            Some(choice) => {
                let actions = choice.generate_actions(state);
                if !actions.is_empty() {
                    return Some(Decision { choice, actions });
                }
                log::trace!("dropping {:?}: no legal actions", choice.kind);
            }
            None => step(state),
        }
    }
}

/// Like [`get_next_choice`], but applies forced choices on the way, so the
/// returned decision always has two or more actions.
pub fn next_open_decision(state: &mut GameState) -> Option<Decision> {
    loop {
        let Decision { choice, mut actions } = get_next_choice(state)?;
        if actions.len() > 1 {
            return Some(Decision { choice, actions });
        }
        let action = actions.swap_remove(0);
        apply_action(state, &choice, action);
    }
}

/// Resolve `choice` with the action at `index` and queue its follow-ups.
pub fn apply_choice(state: &mut GameState, choice: &Choice, index: usize) {
    let follow_ups = choice.resolve(state, index);
    settle(state, follow_ups);
}

/// Resolve `choice` with an action taken from its current action list.
pub fn apply_action(state: &mut GameState, choice: &Choice, action: Action) {
    let follow_ups = choice.apply(state, action);
    settle(state, follow_ups);
}

fn settle(state: &mut GameState, follow_ups: Vec<Choice>) {
    state.queue.extend(follow_ups);
    check_people_conditions(state);
}

// =============================================================================
// Driving a whole game
// =============================================================================

/// Play the game to the end, asking `agent` for every real decision.
pub fn play_out<A: Agent + ?Sized>(state: &mut GameState, agent: &mut A) -> Result<()> {
    drive(state, agent, false)
}

/// Play the game to the end, narrating every action and the final scores
/// through [`Agent::message`].
pub fn run_game<A: Agent + ?Sized>(state: &mut GameState, agent: &mut A) -> Result<GameResult> {
    drive(state, agent, true)?;
    let [first, second] = scores(state);
    agent.message(&format!("{} scores {first} points", state.player(PlayerId::ZERO).name));
    agent.message(&format!("{} scores {second} points", state.player(PlayerId::ONE).name));
    let result = final_result(state);
    agent.message(&format!("Result: {result}"));
    Ok(result)
}

fn drive<A: Agent + ?Sized>(state: &mut GameState, agent: &mut A, narrate: bool) -> Result<()> {
    while let Some(Decision { choice, mut actions }) = get_next_choice(state) {
        let index = if actions.len() == 1 {
            0
        } else {
            select(state, agent, &choice, &actions)?
        };
        if narrate {
            let label = action_label(state, &choice, &actions[index]);
            agent.message(&format!("{}: {label}", choice.player));
        }
        let action = actions.swap_remove(index);
        apply_action(state, &choice, action);
    }
    Ok(())
}

/// Ask the agent, re-prompting on out-of-range answers.
fn select<A: Agent + ?Sized>(
    state: &GameState,
    agent: &mut A,
    choice: &Choice,
    actions: &[Action],
) -> Result<usize> {
    let mut index = 0;
    for attempt in 1..=MAX_SELECTION_ATTEMPTS {
        index = agent.choose_action(state, choice, actions);
        if index < actions.len() {
            return Ok(index);
        }
        log::warn!(
            "selection {index} out of range for {} options (attempt {attempt})",
            actions.len()
        );
    }
    Err(GodsError::InvalidSelection { index, options: actions.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardColor, CardRecord, CardType};
    use crate::zones::{Location, Zone};

    fn add(state: &mut GameState, name: &str, card_type: CardType, location: Location) {
        let record = CardRecord::new(name, card_type, CardColor::Red, 1, "");
        state.add_card(Card::from_record(&record, 1), location);
    }

    #[test]
    fn test_main_actions_without_hand() {
        let state = GameState::new(0);
        let actions = main_actions(&state, PlayerId::ZERO);
        assert_eq!(
            actions,
            vec![Action::Main(MainAction::Pass), Action::Main(MainAction::End)]
        );
    }

    #[test]
    fn test_first_choice_is_main() {
        let mut state = GameState::new(0);
        add(&mut state, "Plain", CardType::Event, Location::of(Zone::Hand, PlayerId::ZERO));

        let decision = get_next_choice(&mut state).unwrap();
        assert!(decision.choice.is_main());
        assert_eq!(decision.choice.player, PlayerId::ZERO);
        assert_eq!(decision.actions.len(), 3);
        assert_eq!(state.phase, Phase::Main);
    }

    #[test]
    fn test_pass_on_empty_deck_ends_game() {
        let mut state = GameState::new(0);
        let decision = get_next_choice(&mut state).unwrap();
        apply_action(&mut state, &decision.choice, Action::Main(MainAction::Pass));

        assert!(get_next_choice(&mut state).is_none());
        assert!(state.game_over);
        assert_eq!(state.ending_player, Some(PlayerId::ZERO));
    }

    #[test]
    fn test_pass_draws_and_hands_over() {
        let mut state = GameState::new(0);
        add(&mut state, "Plain", CardType::Event, Location::of(Zone::Deck, PlayerId::ZERO));

        let decision = get_next_choice(&mut state).unwrap();
        apply_action(&mut state, &decision.choice, Action::Main(MainAction::Pass));

        let next = get_next_choice(&mut state).unwrap();
        assert_eq!(next.choice.player, PlayerId::ONE);
        assert_eq!(state.player(PlayerId::ZERO).hand.len(), 1);
        assert!(state.check_zones().is_ok());
    }

    #[test]
    fn test_declaring_end_gives_opponent_final_turn() {
        let mut state = GameState::new(0);
        let decision = get_next_choice(&mut state).unwrap();
        apply_action(&mut state, &decision.choice, Action::Main(MainAction::End));

        let next = get_next_choice(&mut state).unwrap();
        assert_eq!(next.choice.player, PlayerId::ONE);
        assert!(state.final_turn);

        apply_action(&mut state, &next.choice, Action::Main(MainAction::End));
        assert!(get_next_choice(&mut state).is_none());
        assert_eq!(state.ending_player, Some(PlayerId::ONE));
    }
}
