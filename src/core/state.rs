//! Game state: the card arena, zones, turn bookkeeping and pending choices.
//!
//! ## Layout
//!
//! - `cards`: every card instance of the game, indexed by [`EntityId`]
//! - `players`: per-player zones holding card handles
//! - `peoples` / `shared_deck`: the two ownerless zones
//! - turn fields: current player, phase, ending flags, extra turns
//! - `queue`: pending [`Choice`]s, FIFO
//! - `rng`: the game's own random stream
//!
//! Everything uses `im` persistent vectors, so `clone()` is cheap and shares
//! structure with the original. Search code clones a state per branch and
//! mutates the copy freely.
//!
//! ## Zone membership
//!
//! Every card is listed in exactly one zone list and its `location` names
//! that list. Only the movement methods here touch zone lists, and each
//! keeps both sides in sync. [`GameState::check_zones`] verifies the
//! invariant and is used heavily by the tests.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::{PlayerId, PLAYER_COUNT};
use super::rng::GameRng;
use crate::cards::Card;
use crate::choice::Choice;
use crate::zones::{CardId, Location, Zone};

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Start,
    Main,
    PostPlay,
    PostPassEffects,
    PostPassDraw,
    End,
}

/// A player's four zones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub deck: Vector<EntityId>,
    pub hand: Vector<EntityId>,
    pub discard: Vector<EntityId>,
    pub wonders: Vector<EntityId>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<EntityId> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Discard => &self.discard,
            Zone::Wonders => &self.wonders,
            Zone::People | Zone::Shared => panic!("{zone} is not a player zone"),
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vector<EntityId> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Discard => &mut self.discard,
            Zone::Wonders => &mut self.wonders,
            Zone::People | Zone::Shared => panic!("{zone} is not a player zone"),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    cards: Vector<Card>,
    pub players: [Player; PLAYER_COUNT],
    pub peoples: Vector<EntityId>,
    pub shared_deck: Vector<EntityId>,

    pub current_player: PlayerId,
    pub phase: Phase,
    /// Someone declared the end of the game.
    pub game_ending: bool,
    /// Who declared the end, or who passed on an empty deck. Loses ties.
    pub ending_player: Option<PlayerId>,
    /// The current turn is the last one.
    pub final_turn: bool,
    pub game_over: bool,
    pub extra_turns: u32,

    /// Pending decisions, oldest first.
    pub queue: Vector<Choice>,

    pub rng: GameRng,
}

impl GameState {
    /// Create an empty table: two players with empty zones, player 0 to act.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Vector::new(),
            players: [Player::new("Player 1"), Player::new("Player 2")],
            peoples: Vector::new(),
            shared_deck: Vector::new(),
            current_player: PlayerId::ZERO,
            phase: Phase::Start,
            game_ending: false,
            ending_player: None,
            final_turn: false,
            game_over: false,
            extra_turns: 0,
            queue: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Clone for an independent branch with its own forked random stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let mut branch = self.clone();
        branch.rng = self.rng.fork();
        branch
    }

    // === Card arena ===

    /// Add a card to the arena, listing it at the end of `location`.
    ///
    /// Cards added to a player zone start owned by that player.
    pub fn add_card(&mut self, mut card: Card, location: Location) -> EntityId {
        let id = EntityId(self.cards.len() as u32);
        card.id = id;
        card.location = location;
        if card.owner.is_none() && !card.is_people() {
            card.owner = location.player;
        }
        self.cards.push_back(card);
        self.zone_list_mut(location).push_back(id);
        id
    }

    #[inline]
    #[must_use]
    pub fn card(&self, id: EntityId) -> &Card {
        &self.cards[id.index()]
    }

    #[inline]
    pub fn card_mut(&mut self, id: EntityId) -> &mut Card {
        &mut self.cards[id.index()]
    }

    /// All cards in the arena, in id order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // === Players and zones ===

    #[inline]
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    #[must_use]
    pub fn opponent(&self) -> PlayerId {
        self.current_player.opponent()
    }

    /// The zone list behind a location.
    #[must_use]
    pub fn zone_list(&self, location: Location) -> &Vector<EntityId> {
        match location.zone {
            Zone::People => &self.peoples,
            Zone::Shared => &self.shared_deck,
            zone => {
                let player = location
                    .player
                    .unwrap_or_else(|| panic!("{zone} address without a player"));
                self.players[player.index()].zone(zone)
            }
        }
    }

    fn zone_list_mut(&mut self, location: Location) -> &mut Vector<EntityId> {
        match location.zone {
            Zone::People => &mut self.peoples,
            Zone::Shared => &mut self.shared_deck,
            zone => {
                let player = location
                    .player
                    .unwrap_or_else(|| panic!("{zone} address without a player"));
                self.players[player.index()].zone_mut(zone)
            }
        }
    }

    /// Resolve a transient address to the card it names right now.
    ///
    /// Panics on an out-of-range index, on a player zone address without a
    /// player, and on a People address whose recorded controller no longer
    /// matches the card's owner.
    #[must_use]
    pub fn resolve(&self, id: CardId) -> EntityId {
        let list = self.zone_list(id.location());
        let entity = *list
            .get(id.index)
            .unwrap_or_else(|| panic!("stale card address {id}: zone holds {} cards", list.len()));
        if id.zone == Zone::People {
            assert_eq!(
                self.card(entity).owner,
                id.owner,
                "People ownership changed since {id} was produced"
            );
        }
        entity
    }

    /// The card a transient address names right now.
    #[must_use]
    pub fn get_card(&self, id: CardId) -> &Card {
        self.card(self.resolve(id))
    }

    /// Current address of a card.
    #[must_use]
    pub fn card_id_of(&self, entity: EntityId) -> CardId {
        let card = self.card(entity);
        let index = self
            .zone_list(card.location)
            .index_of(&entity)
            .unwrap_or_else(|| panic!("{entity} missing from its {}", card.location.zone));
        let owner = match card.location.zone {
            Zone::People => card.owner,
            _ => card.location.player,
        };
        CardId::new(card.location.zone, index, owner)
    }

    /// Addresses of every card in a player zone, in order.
    #[must_use]
    pub fn zone_ids(&self, zone: Zone, player: PlayerId) -> Vec<CardId> {
        (0..self.player(player).zone(zone).len())
            .map(|index| CardId::in_zone(zone, index, player))
            .collect()
    }

    /// Addresses of every People card, carrying their current controllers.
    #[must_use]
    pub fn people_ids(&self) -> Vec<CardId> {
        self.peoples
            .iter()
            .enumerate()
            .map(|(index, &people)| CardId::people(index, self.card(people).owner))
            .collect()
    }

    /// Wonders of both players, player 0 first.
    #[must_use]
    pub fn all_wonders(&self) -> Vec<EntityId> {
        PlayerId::all()
            .flat_map(|player| self.player(player).wonders.iter().copied())
            .collect()
    }

    /// Wonders of the active player, then of the opponent.
    #[must_use]
    pub fn wonders_by_priority(&self) -> Vec<EntityId> {
        let active = self.current_player;
        self.player(active)
            .wonders
            .iter()
            .chain(self.player(active.opponent()).wonders.iter())
            .copied()
            .collect()
    }

    /// Snapshot of one player's wonders (safe to iterate while mutating).
    #[must_use]
    pub fn wonders_of(&self, player: PlayerId) -> Vec<EntityId> {
        self.player(player).wonders.iter().copied().collect()
    }

    // === Movement ===

    /// Move a card to the end of `to`, wherever it currently is.
    pub fn move_card(&mut self, entity: EntityId, to: Location) {
        let from = self.card(entity).location;
        let list = self.zone_list_mut(from);
        let index = list
            .index_of(&entity)
            .unwrap_or_else(|| panic!("{entity} missing from its {}", from.zone));
        list.remove(index);
        self.zone_list_mut(to).push_back(entity);
        self.card_mut(entity).location = to;
    }

    /// Take the top (last) card of a player's deck into their hand.
    pub fn draw_top(&mut self, player: PlayerId) -> Option<EntityId> {
        let top = self.player(player).deck.last().copied()?;
        self.move_card(top, Location::of(Zone::Hand, player));
        Some(top)
    }

    /// Replace the contents of a player zone, relocating the given cards.
    ///
    /// The new list must hold exactly the cards being moved out of other
    /// zones plus any the zone already held.
    pub fn replace_zone(&mut self, zone: Zone, player: PlayerId, cards: Vector<EntityId>) {
        let location = Location::of(zone, player);
        for &entity in cards.iter() {
            self.card_mut(entity).location = location;
        }
        *self.players[player.index()].zone_mut(zone) = cards;
    }

    /// Shuffle a player's deck with the game's random stream.
    pub fn shuffle_deck(&mut self, player: PlayerId) {
        let deck = self.rng.shuffled(&self.players[player.index()].deck);
        self.players[player.index()].deck = deck;
    }

    // === Turn bookkeeping ===

    /// Hand the turn over.
    ///
    /// An extra turn is consumed first (same player again). Otherwise the
    /// final turn ends the game; otherwise the other player becomes active,
    /// and if the game is ending that player's turn is the final one unless
    /// they declared the end themselves.
    pub fn switch_turn(&mut self) {
        if self.extra_turns > 0 {
            self.extra_turns -= 1;
            return;
        }
        if self.final_turn {
            self.game_over = true;
            return;
        }
        self.current_player = self.current_player.opponent();
        if self.game_ending && Some(self.current_player) != self.ending_player {
            self.final_turn = true;
        }
    }

    /// Verify that every card is listed exactly once, where its location says.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn check_zones(&self) -> Result<(), String> {
        let mut seen = vec![0u8; self.cards.len()];
        let mut lists: Vec<(Location, &Vector<EntityId>)> = vec![
            (Location::PEOPLE, &self.peoples),
            (Location::SHARED, &self.shared_deck),
        ];
        for player in PlayerId::all() {
            for zone in Zone::PLAYER_ZONES {
                lists.push((Location::of(zone, player), self.player(player).zone(zone)));
            }
        }

        for (location, list) in lists {
            for &entity in list.iter() {
                let slot = seen
                    .get_mut(entity.index())
                    .ok_or_else(|| format!("{entity} is not in the arena"))?;
                *slot += 1;
                if self.card(entity).location != location {
                    return Err(format!(
                        "{} listed in {:?} but located at {:?}",
                        self.card(entity).name,
                        location,
                        self.card(entity).location
                    ));
                }
            }
        }

        match seen.iter().position(|&count| count != 1) {
            Some(index) => Err(format!(
                "{} listed {} times",
                self.cards[index].name, seen[index]
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardColor, CardRecord, CardType};

    fn card(name: &str, card_type: CardType) -> Card {
        Card::from_record(&CardRecord::new(name, card_type, CardColor::Blue, 0, ""), 2)
    }

    fn sample_state() -> (GameState, EntityId, EntityId, EntityId) {
        let mut state = GameState::new(1);
        let sky = state.add_card(card("Sky", CardType::Wonder), Location::of(Zone::Hand, PlayerId::ZERO));
        let flood = state.add_card(card("Flood", CardType::Event), Location::of(Zone::Deck, PlayerId::ZERO));
        let greeks = state.add_card(card("Greeks", CardType::People), Location::PEOPLE);
        (state, sky, flood, greeks)
    }

    #[test]
    fn test_add_card_assigns_ids_and_owner() {
        let (state, sky, flood, greeks) = sample_state();

        assert_eq!(sky, EntityId(0));
        assert_eq!(flood, EntityId(1));
        assert_eq!(state.card(sky).owner, Some(PlayerId::ZERO));
        assert_eq!(state.card(greeks).owner, None);
        assert!(state.check_zones().is_ok());
    }

    #[test]
    fn test_move_card_updates_location() {
        let (mut state, sky, _, _) = sample_state();

        state.move_card(sky, Location::of(Zone::Wonders, PlayerId::ZERO));

        assert!(state.player(PlayerId::ZERO).hand.is_empty());
        assert_eq!(state.player(PlayerId::ZERO).wonders.len(), 1);
        assert!(state.card(sky).is_in(Zone::Wonders, PlayerId::ZERO));
        assert!(state.check_zones().is_ok());
    }

    #[test]
    fn test_resolve_and_card_id_of_agree() {
        let (state, sky, _, greeks) = sample_state();

        let id = state.card_id_of(sky);
        assert_eq!(id, CardId::in_zone(Zone::Hand, 0, PlayerId::ZERO));
        assert_eq!(state.resolve(id), sky);

        let people = state.people_ids();
        assert_eq!(state.resolve(people[0]), greeks);
    }

    #[test]
    #[should_panic(expected = "People ownership changed")]
    fn test_resolve_rejects_stale_people_owner() {
        let (mut state, _, _, greeks) = sample_state();
        let id = state.people_ids()[0];
        state.card_mut(greeks).owner = Some(PlayerId::ONE);
        let _ = state.resolve(id);
    }

    #[test]
    #[should_panic(expected = "stale card address")]
    fn test_resolve_rejects_out_of_range() {
        let (state, _, _, _) = sample_state();
        let _ = state.resolve(CardId::in_zone(Zone::Hand, 3, PlayerId::ZERO));
    }

    #[test]
    fn test_draw_top() {
        let (mut state, _, flood, _) = sample_state();

        assert_eq!(state.draw_top(PlayerId::ZERO), Some(flood));
        assert_eq!(state.draw_top(PlayerId::ZERO), None);
        assert_eq!(state.player(PlayerId::ZERO).hand.len(), 2);
        assert!(state.check_zones().is_ok());
    }

    #[test]
    fn test_switch_turn_extra_turn() {
        let mut state = GameState::new(0);
        state.extra_turns = 1;

        state.switch_turn();
        assert_eq!(state.current_player, PlayerId::ZERO);
        assert_eq!(state.extra_turns, 0);

        state.switch_turn();
        assert_eq!(state.current_player, PlayerId::ONE);
    }

    #[test]
    fn test_switch_turn_final_turn() {
        let mut state = GameState::new(0);
        state.game_ending = true;
        state.ending_player = Some(PlayerId::ZERO);

        state.switch_turn();
        assert_eq!(state.current_player, PlayerId::ONE);
        assert!(state.final_turn);
        assert!(!state.game_over);

        state.switch_turn();
        assert!(state.game_over);
    }

    #[test]
    fn test_clone_is_independent() {
        let (mut state, sky, _, _) = sample_state();
        let snapshot = state.clone();

        state.move_card(sky, Location::of(Zone::Discard, PlayerId::ZERO));
        state.card_mut(sky).counters = 3;

        assert!(snapshot.card(sky).is_in(Zone::Hand, PlayerId::ZERO));
        assert_eq!(snapshot.card(sky).counters, 0);
        assert!(snapshot.check_zones().is_ok());
    }
}
