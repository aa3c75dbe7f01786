//! Zones and transient card addresses.
//!
//! Each player owns four ordered zones (deck, hand, discard, wonders in
//! play). The People pool and the shared deck sit in the middle of the table
//! and belong to nobody.
//!
//! ## Addressing
//!
//! A [`CardId`] is a structural address: zone, index inside the zone, and the
//! owning player. It is only meaningful for the state it was produced from;
//! any zone mutation (a card leaving a hand, a wonder being destroyed) can
//! shift the indices behind it. Consumers resolve a `CardId` into a stable
//! [`EntityId`](crate::core::EntityId) with [`GameState::resolve`] at the
//! moment of use and never hold on to it across a mutation.
//!
//! [`GameState::resolve`]: crate::core::GameState::resolve

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A place a card can be listed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Deck,
    Hand,
    Discard,
    Wonders,
    People,
    Shared,
}

impl Zone {
    /// Zones that belong to a single player.
    pub const PLAYER_ZONES: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::Discard, Zone::Wonders];

    /// Whether cards in this zone are listed per player.
    #[must_use]
    pub const fn is_player_zone(self) -> bool {
        !matches!(self, Zone::People | Zone::Shared)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Discard => "discard",
            Zone::Wonders => "wonders",
            Zone::People => "people",
            Zone::Shared => "shared deck",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a card currently sits: the zone and, for player zones, the holder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub zone: Zone,
    pub player: Option<PlayerId>,
}

impl Location {
    #[must_use]
    pub const fn new(zone: Zone, player: Option<PlayerId>) -> Self {
        Self { zone, player }
    }

    /// A zone owned by `player`.
    #[must_use]
    pub const fn of(zone: Zone, player: PlayerId) -> Self {
        Self { zone, player: Some(player) }
    }

    /// The shared People pool.
    pub const PEOPLE: Location = Location { zone: Zone::People, player: None };

    /// The shared deck.
    pub const SHARED: Location = Location { zone: Zone::Shared, player: None };
}

/// Transient structural address of a card.
///
/// For player zones `owner` names the player whose zone is meant. For the
/// People pool `owner` is the People card's controller at the time the id
/// was produced; resolving it asserts the controller has not changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub zone: Zone,
    pub index: usize,
    pub owner: Option<PlayerId>,
}

impl CardId {
    #[must_use]
    pub const fn new(zone: Zone, index: usize, owner: Option<PlayerId>) -> Self {
        Self { zone, index, owner }
    }

    /// Address of a card in one of `player`'s zones.
    #[must_use]
    pub const fn in_zone(zone: Zone, index: usize, player: PlayerId) -> Self {
        Self::new(zone, index, Some(player))
    }

    /// Address of a People card controlled by `owner` (if anyone).
    #[must_use]
    pub const fn people(index: usize, owner: Option<PlayerId>) -> Self {
        Self::new(Zone::People, index, owner)
    }

    /// The zone list this address points into.
    #[must_use]
    pub fn location(&self) -> Location {
        if self.zone.is_player_zone() {
            Location::new(self.zone, self.owner)
        } else {
            Location::new(self.zone, None)
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.owner {
            Some(player) => write!(f, "{}[{}] ({})", self.zone, self.index, player),
            None => write!(f, "{}[{}]", self.zone, self.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_zones() {
        for zone in Zone::PLAYER_ZONES {
            assert!(zone.is_player_zone());
        }
        assert!(!Zone::People.is_player_zone());
        assert!(!Zone::Shared.is_player_zone());
    }

    #[test]
    fn test_people_location_drops_owner() {
        let id = CardId::people(2, Some(PlayerId::ONE));
        assert_eq!(id.location(), Location::PEOPLE);

        let id = CardId::in_zone(Zone::Hand, 0, PlayerId::ZERO);
        assert_eq!(id.location(), Location::of(Zone::Hand, PlayerId::ZERO));
    }

    #[test]
    fn test_display() {
        let id = CardId::in_zone(Zone::Wonders, 1, PlayerId::ONE);
        assert_eq!(id.to_string(), "wonders[1] (Player 2)");
        assert_eq!(CardId::people(0, None).to_string(), "people[0]");
    }
}
