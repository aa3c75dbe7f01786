//! Pending decisions.
//!
//! A [`Choice`] is a decision point owned by one player: the main
//! play/pass/end decision of a turn, or a sub-decision spawned by a card
//! effect ("destroy a People with power 3 or less").
//!
//! ## Contract
//!
//! - [`Choice::generate_actions`] lists the legal actions against the
//!   current state. It is recomputed on every call and never cached.
//! - [`Choice::resolve`] regenerates the actions, applies the one at the
//!   given index and returns the follow-up choices the effect spawned.
//!
//! Choices only carry stable [`EntityId`]s (the card that created them);
//! card-valued actions are transient [`CardId`]s resolved at the moment the
//! action is applied.
//!
//! The engine drops a choice that has no actions and applies a choice with
//! a single action without consulting an agent (see [`crate::rules`]).

pub mod combinations;
pub mod view;

use serde::{Deserialize, Serialize};

use crate::cards::library::{self, events, wonders};
use crate::core::{EntityId, GameState, PlayerId};
use crate::rules::turn;
use crate::zones::CardId;

use combinations::Picks;

pub use view::{ActionView, ChoiceView};

/// Shape of a choice, as shown to front ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChoiceTag {
    Main,
    ChooseCard,
    ChooseCards,
    ChooseBinary,
}

impl ChoiceTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ChoiceTag::Main => "main",
            ChoiceTag::ChooseCard => "choose-card",
            ChoiceTag::ChooseCards => "choose-cards",
            ChoiceTag::ChooseBinary => "choose-binary",
        }
    }
}

/// The three options of the main decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainAction {
    Play,
    Pass,
    End,
}

/// One option of a choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Main(MainAction),
    Card(CardId),
    Cards(Picks<CardId>),
    Binary(bool),
    /// No selection: decline an optional effect or stop an iterated one.
    Done,
}

/// What a choice decides, with the data its resolution needs.
///
/// `source` is always the card whose effect created the choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceKind {
    /// Play, pass or declare the end.
    Main,
    /// Pick the card to play after choosing "play".
    PlayFromHand,
    /// Optionally play a hand card with effective power up to the source's (Light).
    PlayWithinPower { source: EntityId },
    /// Optionally play a non-People hand card with base power up to the source's (Wisdom).
    PlayOnPass { source: EntityId },
    /// Play one more card or stop; repeats while `remaining` lasts (Prophecy).
    PlayExtra { source: EntityId, remaining: u32 },
    /// Play an event from hand boosted by the source's power (Miracle).
    PlayEmpowered { source: EntityId },
    /// Destroy an undestroyed People with power up to the source's.
    DestroyPeople { source: EntityId, optional: bool },
    /// Restore a destroyed People, optionally capped by the source's power.
    RestorePeople { source: EntityId, capped: bool, optional: bool },
    /// Put +1 counters on a People.
    CounterPeople { source: EntityId, undestroyed_only: bool },
    /// Put +1 counters on a wonder (Blessing).
    CounterWonder { source: EntityId },
    /// Destroy a wonder with power up to the source's (Unmaking).
    DestroyWonder { source: EntityId },
    /// Shuffle blue wonders into their owners' decks (Eruption).
    ShuffleWonders { source: EntityId },
    /// Return events from discard to hand (Flashback).
    RecallEvents { source: EntityId },
    /// Return wonders in play to their owners' hands (Time Warp).
    RecallWonders { source: EntityId },
    /// Discard cards from your own hand (Darkness, decided by its victim).
    DiscardCards { source: EntityId },
    /// Draw from the shared deck instead of your own (Stars).
    SharedDraw { source: EntityId },
}

/// A decision for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub player: PlayerId,
    pub kind: ChoiceKind,
}

impl Choice {
    #[must_use]
    pub const fn new(player: PlayerId, kind: ChoiceKind) -> Self {
        Self { player, kind }
    }

    /// The main decision of `player`'s turn.
    #[must_use]
    pub const fn main(player: PlayerId) -> Self {
        Self::new(player, ChoiceKind::Main)
    }

    /// Whether this is a turn-level decision (used by search depth accounting).
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.kind == ChoiceKind::Main
    }

    #[must_use]
    pub fn tag(&self) -> ChoiceTag {
        match self.kind {
            ChoiceKind::Main => ChoiceTag::Main,
            ChoiceKind::ShuffleWonders { .. }
            | ChoiceKind::RecallEvents { .. }
            | ChoiceKind::RecallWonders { .. }
            | ChoiceKind::DiscardCards { .. } => ChoiceTag::ChooseCards,
            ChoiceKind::SharedDraw { .. } => ChoiceTag::ChooseBinary,
            _ => ChoiceTag::ChooseCard,
        }
    }

    /// The card whose effect created this choice, if any.
    #[must_use]
    pub fn source(&self) -> Option<EntityId> {
        match self.kind {
            ChoiceKind::Main | ChoiceKind::PlayFromHand => None,
            ChoiceKind::PlayWithinPower { source }
            | ChoiceKind::PlayOnPass { source }
            | ChoiceKind::PlayExtra { source, .. }
            | ChoiceKind::PlayEmpowered { source }
            | ChoiceKind::DestroyPeople { source, .. }
            | ChoiceKind::RestorePeople { source, .. }
            | ChoiceKind::CounterPeople { source, .. }
            | ChoiceKind::CounterWonder { source }
            | ChoiceKind::DestroyWonder { source }
            | ChoiceKind::ShuffleWonders { source }
            | ChoiceKind::RecallEvents { source }
            | ChoiceKind::RecallWonders { source }
            | ChoiceKind::DiscardCards { source }
            | ChoiceKind::SharedDraw { source } => Some(source),
        }
    }

    /// Legal actions against the current state.
    #[must_use]
    pub fn generate_actions(&self, state: &GameState) -> Vec<Action> {
        let player = self.player;
        match self.kind {
            ChoiceKind::Main => turn::main_actions(state, player),
            ChoiceKind::PlayFromHand => single(state.zone_ids(crate::zones::Zone::Hand, player)),
            ChoiceKind::PlayWithinPower { source } => {
                optional(wonders::light_targets(state, source))
            }
            ChoiceKind::PlayOnPass { source } => optional(wonders::wisdom_targets(state, source)),
            ChoiceKind::PlayExtra { source, .. } => {
                optional(events::prophecy_targets(state, source))
            }
            ChoiceKind::PlayEmpowered { .. } => single(events::miracle_targets(state, player)),
            ChoiceKind::DestroyPeople { source, optional: opt } => {
                let targets = library::destroyable_people(state, source);
                if opt {
                    optional(targets)
                } else {
                    single(targets)
                }
            }
            ChoiceKind::RestorePeople { source, capped, optional: opt } => {
                let targets = library::restorable_people(state, source, capped);
                if opt {
                    optional(targets)
                } else {
                    single(targets)
                }
            }
            ChoiceKind::CounterPeople { undestroyed_only, .. } => {
                single(library::counter_people_targets(state, undestroyed_only))
            }
            ChoiceKind::CounterWonder { .. } => single(library::any_wonder(state)),
            ChoiceKind::DestroyWonder { source } => single(events::unmaking_targets(state, source)),
            ChoiceKind::ShuffleWonders { source } => events::eruption_picks(state, source),
            ChoiceKind::RecallEvents { source } => events::flashback_picks(state, source, player),
            ChoiceKind::RecallWonders { source } => events::time_warp_picks(state, source),
            ChoiceKind::DiscardCards { source } => events::darkness_picks(state, source, player),
            ChoiceKind::SharedDraw { .. } => vec![Action::Binary(true), Action::Binary(false)],
        }
    }

    /// Apply the action at `index` and return the follow-up choices.
    ///
    /// Panics if `index` is out of range; callers bounds-check external
    /// selections before resolving.
    pub fn resolve(&self, state: &mut GameState, index: usize) -> Vec<Choice> {
        let mut actions = self.generate_actions(state);
        assert!(
            index < actions.len(),
            "option {index} out of range for {} actions of {:?}",
            actions.len(),
            self.kind
        );
        let action = actions.swap_remove(index);
        self.apply(state, action)
    }

    /// Apply one action of this choice.
    pub fn apply(&self, state: &mut GameState, action: Action) -> Vec<Choice> {
        let player = self.player;
        if action == Action::Done {
            return match self.kind {
                ChoiceKind::PlayExtra { .. }
                | ChoiceKind::PlayWithinPower { .. }
                | ChoiceKind::PlayOnPass { .. }
                | ChoiceKind::DestroyPeople { .. }
                | ChoiceKind::RestorePeople { .. } => Vec::new(),
                kind => panic!("{kind:?} cannot be declined"),
            };
        }

        match (self.kind, action) {
            (ChoiceKind::Main, Action::Main(main)) => turn::resolve_main(state, player, main),
            (ChoiceKind::PlayFromHand, Action::Card(id))
            | (ChoiceKind::PlayWithinPower { .. }, Action::Card(id))
            | (ChoiceKind::PlayOnPass { .. }, Action::Card(id)) => {
                let card = state.resolve(id);
                crate::rules::play_card(state, card, player)
            }
            (ChoiceKind::PlayExtra { source, remaining }, Action::Card(id)) => {
                events::resolve_prophecy(state, source, remaining, player, id)
            }
            (ChoiceKind::PlayEmpowered { source }, Action::Card(id)) => {
                events::resolve_miracle(state, source, player, id)
            }
            (ChoiceKind::DestroyPeople { .. }, Action::Card(id)) => {
                let people = state.resolve(id);
                crate::rules::destroy_people(state, people);
                Vec::new()
            }
            (ChoiceKind::RestorePeople { .. }, Action::Card(id)) => {
                let people = state.resolve(id);
                crate::rules::restore_people(state, people);
                Vec::new()
            }
            (ChoiceKind::CounterPeople { source, .. }, Action::Card(id))
            | (ChoiceKind::CounterWonder { source }, Action::Card(id)) => {
                library::add_counters(state, source, id);
                Vec::new()
            }
            (ChoiceKind::DestroyWonder { .. }, Action::Card(id)) => {
                let wonder = state.resolve(id);
                crate::rules::destroy_wonder(state, wonder);
                Vec::new()
            }
            (ChoiceKind::ShuffleWonders { .. }, Action::Cards(ids)) => {
                for wonder in resolve_all(state, &ids) {
                    crate::rules::shuffle_into_deck(state, wonder);
                }
                Vec::new()
            }
            (ChoiceKind::RecallEvents { .. }, Action::Cards(ids)) => {
                for event in resolve_all(state, &ids) {
                    crate::rules::return_to_hand(state, event, player);
                }
                Vec::new()
            }
            (ChoiceKind::RecallWonders { .. }, Action::Cards(ids)) => {
                for (wonder, id) in resolve_all(state, &ids).into_iter().zip(ids.iter()) {
                    let holder = id.owner.unwrap_or(player);
                    crate::rules::return_to_hand(state, wonder, holder);
                }
                Vec::new()
            }
            (ChoiceKind::DiscardCards { .. }, Action::Cards(ids)) => {
                for card in resolve_all(state, &ids) {
                    crate::rules::discard_card(state, card);
                }
                Vec::new()
            }
            (ChoiceKind::SharedDraw { source }, Action::Binary(shared)) => {
                wonders::resolve_stars(state, source, player, shared)
            }
            (kind, action) => panic!("{action:?} does not answer {kind:?}"),
        }
    }
}

/// Resolve every address before any of them is acted on.
fn resolve_all(state: &GameState, ids: &[CardId]) -> Vec<EntityId> {
    ids.iter().map(|&id| state.resolve(id)).collect()
}

fn single(targets: Vec<CardId>) -> Vec<Action> {
    targets.into_iter().map(Action::Card).collect()
}

fn optional(targets: Vec<CardId>) -> Vec<Action> {
    let mut actions = single(targets);
    actions.push(Action::Done);
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        let source = EntityId(0);
        assert_eq!(Choice::main(PlayerId::ZERO).tag(), ChoiceTag::Main);
        assert_eq!(
            Choice::new(PlayerId::ZERO, ChoiceKind::RecallEvents { source }).tag(),
            ChoiceTag::ChooseCards
        );
        assert_eq!(
            Choice::new(PlayerId::ZERO, ChoiceKind::SharedDraw { source }).tag(),
            ChoiceTag::ChooseBinary
        );
        assert_eq!(
            Choice::new(PlayerId::ZERO, ChoiceKind::DestroyWonder { source }).tag(),
            ChoiceTag::ChooseCard
        );
    }

    #[test]
    fn test_tag_strings() {
        let json = serde_json::to_string(&ChoiceTag::ChooseBinary).unwrap();
        assert_eq!(json, "\"choose-binary\"");
        assert_eq!(ChoiceTag::ChooseCards.as_str(), "choose-cards");
    }

    #[test]
    fn test_source() {
        let source = EntityId(4);
        assert_eq!(Choice::main(PlayerId::ONE).source(), None);
        let choice = Choice::new(PlayerId::ONE, ChoiceKind::PlayExtra { source, remaining: 2 });
        assert_eq!(choice.source(), Some(source));
        assert!(!choice.is_main());
    }
}
