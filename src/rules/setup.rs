//! Game setup.
//!
//! A standard game deals each player a random deck of wonders and events
//! (powers rolled per card), puts a few random People in the middle and
//! leaves every other playable card in the shared deck.

use serde::{Deserialize, Serialize};

use crate::cards::{BuiltinCatalog, Card, CardRecord, CardSource};
use crate::core::{GameState, PlayerId};
use crate::error::{GodsError, Result};
use crate::zones::{Location, Zone};

use super::scoring::check_people_conditions;

/// Table layout parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    /// Cards in each player's deck before the opening hand is drawn.
    pub deck_size: usize,
    /// Opening hand size.
    pub hand_size: usize,
    /// People cards in play.
    pub people_count: usize,
    /// Lowest rolled power of a wonder or event.
    pub min_power: i32,
    /// Highest rolled power of a wonder or event.
    pub max_power: i32,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            deck_size: 10,
            hand_size: 5,
            people_count: 3,
            min_power: 1,
            max_power: 5,
        }
    }
}

impl GameSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_people_count(mut self, count: usize) -> Self {
        self.people_count = count;
        self
    }

    #[must_use]
    pub fn with_power_range(mut self, min: i32, max: i32) -> Self {
        assert!(min <= max, "Power range must not be empty");
        self.min_power = min;
        self.max_power = max;
        self
    }

    /// Deal a game from the records of `source`.
    pub fn build(&self, source: &dyn CardSource, seed: u64) -> Result<GameState> {
        let records = source.load()?;
        let mut state = GameState::new(seed);

        let mut playable: Vec<(&CardRecord, i32)> = Vec::new();
        for record in records.iter().filter(|record| !record.is_people()) {
            let power = state.rng.gen_range_inclusive(self.min_power..=self.max_power);
            playable.push((record, power));
        }
        let mut peoples: Vec<&CardRecord> = records.iter().filter(|r| r.is_people()).collect();

        require("playable", 2 * self.deck_size, playable.len())?;
        require("People", self.people_count, peoples.len())?;

        state.rng.shuffle(&mut playable);
        for _ in 0..self.deck_size {
            for player in PlayerId::all() {
                if let Some((record, power)) = playable.pop() {
                    state.add_card(Card::from_record(record, power), Location::of(Zone::Deck, player));
                }
            }
        }

        state.rng.shuffle(&mut peoples);
        for _ in 0..self.people_count {
            if let Some(record) = peoples.pop() {
                state.add_card(Card::from_record(record, record.power), Location::PEOPLE);
            }
        }

        for (record, power) in playable {
            state.add_card(Card::from_record(record, power), Location::SHARED);
        }

        for player in PlayerId::all() {
            state.shuffle_deck(player);
            for _ in 0..self.hand_size {
                if state.draw_top(player).is_none() {
                    break;
                }
            }
        }

        check_people_conditions(&mut state);
        log::debug!(
            "dealt {} cards ({} People, {} in the shared deck)",
            state.card_count(),
            state.peoples.len(),
            state.shared_deck.len()
        );
        Ok(state)
    }
}

fn require(kind: &'static str, needed: usize, available: usize) -> Result<()> {
    if available < needed {
        return Err(GodsError::NotEnoughCards { kind, needed, available });
    }
    Ok(())
}

/// Standard game with the built-in catalogue.
pub fn quick_setup(seed: u64) -> Result<GameState> {
    GameSetup::default().build(&BuiltinCatalog, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    #[test]
    fn test_quick_setup_layout() {
        let state = quick_setup(42).unwrap();

        for player in PlayerId::all() {
            assert_eq!(state.player(player).hand.len(), 5);
            assert_eq!(state.player(player).deck.len(), 5);
            assert!(state.player(player).wonders.is_empty());
        }
        assert_eq!(state.peoples.len(), 3);
        assert_eq!(state.shared_deck.len(), 32 - 20);
        assert_eq!(state.card_count(), 32 + 3);
        assert!(state.check_zones().is_ok());
    }

    #[test]
    fn test_powers_in_range_and_owners_set() {
        let state = quick_setup(9).unwrap();
        for card in state.cards() {
            if card.card_type == CardType::People {
                continue;
            }
            assert!((1..=5).contains(&card.power), "{} has power {}", card.name, card.power);
        }
        for player in PlayerId::all() {
            for &card in state.player(player).hand.iter() {
                assert_eq!(state.card(card).owner, Some(player));
            }
        }
        for &card in state.shared_deck.iter() {
            assert_eq!(state.card(card).owner, None);
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let first = quick_setup(5).unwrap();
        let second = quick_setup(5).unwrap();
        assert_eq!(first.players, second.players);
        assert_eq!(first.peoples, second.peoples);
    }

    #[test]
    fn test_not_enough_cards() {
        let result = GameSetup::new().with_deck_size(20).build(&BuiltinCatalog, 1);
        assert!(matches!(
            result,
            Err(GodsError::NotEnoughCards { kind: "playable", needed: 40, available: 32 })
        ));
    }
}
