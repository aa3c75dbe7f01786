//! Serializable views of pending choices for front ends.
//!
//! A view carries the choice tag, a prompt, a label per action and the
//! stable ids of the cards each action refers to, so a UI can highlight
//! cards without knowing anything about zone addressing.

use serde::{Deserialize, Serialize};

use super::{Action, Choice, ChoiceKind, ChoiceTag, MainAction};
use crate::core::{GameState, PlayerId};
use crate::zones::CardId;

/// One action as shown to a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionView {
    pub label: String,
    /// Stable ids of the cards the action names.
    pub card_ids: Vec<u32>,
}

/// A pending choice as shown to a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    pub player: PlayerId,
    pub tag: ChoiceTag,
    pub prompt: String,
    pub actions: Vec<ActionView>,
}

impl ChoiceView {
    #[must_use]
    pub fn new(state: &GameState, choice: &Choice, actions: &[Action]) -> Self {
        Self {
            player: choice.player,
            tag: choice.tag(),
            prompt: prompt(state, choice),
            actions: actions
                .iter()
                .map(|action| ActionView {
                    label: action_label(state, choice, action),
                    card_ids: card_ids(state, action),
                })
                .collect(),
        }
    }

    /// JSON rendering, as sent to remote front ends.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn prompt(state: &GameState, choice: &Choice) -> String {
    let source = choice.source().map(|card| state.card(card).name.as_str()).unwrap_or("");
    match choice.kind {
        ChoiceKind::Main => "Play a card, pass, or declare the end".to_string(),
        ChoiceKind::PlayFromHand => "Choose a card to play".to_string(),
        ChoiceKind::PlayWithinPower { .. }
        | ChoiceKind::PlayOnPass { .. }
        | ChoiceKind::PlayExtra { .. } => format!("{source}: you may play a card"),
        ChoiceKind::PlayEmpowered { .. } => format!("{source}: choose an event to play"),
        ChoiceKind::DestroyPeople { .. } => format!("{source}: choose a People to destroy"),
        ChoiceKind::RestorePeople { .. } => format!("{source}: choose a People to restore"),
        ChoiceKind::CounterPeople { .. } => format!("{source}: choose a People"),
        ChoiceKind::CounterWonder { .. } => format!("{source}: choose a wonder"),
        ChoiceKind::DestroyWonder { .. } => format!("{source}: choose a wonder to destroy"),
        ChoiceKind::ShuffleWonders { .. } => format!("{source}: choose wonders to shuffle away"),
        ChoiceKind::RecallEvents { .. } => format!("{source}: choose events to take back"),
        ChoiceKind::RecallWonders { .. } => format!("{source}: choose wonders to return"),
        ChoiceKind::DiscardCards { .. } => format!("{source}: choose cards to discard"),
        ChoiceKind::SharedDraw { .. } => format!("{source}: draw from the shared deck?"),
    }
}

/// Human-readable label of one action.
#[must_use]
pub fn action_label(state: &GameState, choice: &Choice, action: &Action) -> String {
    match action {
        Action::Main(MainAction::Play) => "Play a card".to_string(),
        Action::Main(MainAction::Pass) => "Pass".to_string(),
        Action::Main(MainAction::End) => "Declare the end".to_string(),
        Action::Card(id) => card_label(state, *id),
        Action::Cards(ids) if ids.is_empty() => "Nothing".to_string(),
        Action::Cards(ids) => ids
            .iter()
            .map(|&id| card_label(state, id))
            .collect::<Vec<_>>()
            .join(", "),
        Action::Binary(yes) => match (choice.kind, yes) {
            (ChoiceKind::SharedDraw { .. }, true) => "Draw from shared deck".to_string(),
            (ChoiceKind::SharedDraw { .. }, false) => "Draw normally".to_string(),
            (_, true) => "Yes".to_string(),
            (_, false) => "No".to_string(),
        },
        Action::Done => "Done".to_string(),
    }
}

fn card_label(state: &GameState, id: CardId) -> String {
    format!("{} ({id})", state.get_card(id).name)
}

fn card_ids(state: &GameState, action: &Action) -> Vec<u32> {
    match action {
        Action::Card(id) => vec![state.resolve(*id).raw()],
        Action::Cards(ids) => ids.iter().map(|&id| state.resolve(id).raw()).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardColor, CardRecord, CardType};
    use crate::core::EntityId;
    use crate::zones::{Location, Zone};

    #[test]
    fn test_main_view() {
        let mut state = GameState::new(0);
        let record = CardRecord::new("Sky", CardType::Wonder, CardColor::Blue, 0, "");
        state.add_card(Card::from_record(&record, 2), Location::of(Zone::Hand, PlayerId::ZERO));

        let choice = Choice::main(PlayerId::ZERO);
        let actions = choice.generate_actions(&state);
        let view = ChoiceView::new(&state, &choice, &actions);

        assert_eq!(view.tag, ChoiceTag::Main);
        let labels: Vec<&str> = view.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, ["Play a card", "Pass", "Declare the end"]);
    }

    #[test]
    fn test_card_action_carries_stable_id() {
        let mut state = GameState::new(0);
        let record = CardRecord::new("Sky", CardType::Wonder, CardColor::Blue, 0, "");
        let sky = state.add_card(Card::from_record(&record, 2), Location::of(Zone::Hand, PlayerId::ONE));

        let choice = Choice::new(PlayerId::ONE, ChoiceKind::PlayFromHand);
        let actions = choice.generate_actions(&state);
        let view = ChoiceView::new(&state, &choice, &actions);

        assert_eq!(view.actions[0].card_ids, vec![sky.raw()]);
        assert!(view.actions[0].label.starts_with("Sky"));
        assert!(view.to_json().unwrap().contains("\"choose-card\""));
    }

    #[test]
    fn test_shared_draw_labels() {
        let state = GameState::new(0);
        let choice = Choice::new(PlayerId::ZERO, ChoiceKind::SharedDraw { source: EntityId(0) });
        assert_eq!(
            action_label(&state, &choice, &Action::Binary(true)),
            "Draw from shared deck"
        );
        assert_eq!(action_label(&state, &choice, &Action::Binary(false)), "Draw normally");
    }
}
