//! Card instances - the mutable per-game state of one physical card.

use serde::{Deserialize, Serialize};

use super::behavior::CardBehavior;
use super::definition::{CardColor, CardRecord, CardType};
use super::kind::CardKind;
use crate::core::{EntityId, PlayerId};
use crate::zones::{Location, Zone};

/// One card in a game.
///
/// `id` is the card's slot in the state's card arena and never changes.
/// `location` mirrors the zone list the card is listed in; it is kept in
/// sync by the state's movement methods and must not be edited directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: EntityId,
    pub kind: CardKind,
    pub name: String,
    pub card_type: CardType,
    pub color: CardColor,
    /// Base power.
    pub power: i32,
    /// Net total of +1/-1 counters.
    pub counters: i32,
    pub destroyed: bool,
    /// Owning player; for People cards the current controller.
    pub owner: Option<PlayerId>,
    pub effect: String,
    pub(crate) location: Location,
}

impl Card {
    /// Create an unplaced card from a record with the given base power.
    ///
    /// The id and location are assigned when the card is added to a state.
    #[must_use]
    pub fn from_record(record: &CardRecord, power: i32) -> Self {
        Self {
            id: EntityId(u32::MAX),
            kind: CardKind::from_name(&record.name),
            name: record.name.clone(),
            card_type: record.card_type,
            color: record.color,
            power,
            counters: 0,
            destroyed: false,
            owner: None,
            effect: record.effect.clone(),
            location: Location::SHARED,
        }
    }

    /// Hook table for this card.
    #[inline]
    #[must_use]
    pub fn behavior(&self) -> &'static CardBehavior {
        self.kind.behavior()
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Whether the card is listed in `player`'s `zone`.
    #[must_use]
    pub fn is_in(&self, zone: Zone, player: PlayerId) -> bool {
        self.location == Location::of(zone, player)
    }

    #[must_use]
    pub fn is_wonder(&self) -> bool {
        self.card_type == CardType::Wonder
    }

    #[must_use]
    pub fn is_event(&self) -> bool {
        self.card_type == CardType::Event
    }

    #[must_use]
    pub fn is_people(&self) -> bool {
        self.card_type == CardType::People
    }

    /// One-line description with colour, type, base power and counters.
    ///
    /// ```
    /// use gods_engine::cards::{Card, CardColor, CardRecord, CardType};
    ///
    /// let record = CardRecord::new("Sun", CardType::Wonder, CardColor::Yellow, 0, "Your other green wonders get +○");
    /// let mut sun = Card::from_record(&record, 3);
    /// sun.counters = 2;
    /// assert_eq!(sun.detailed(), "Sun [yellow wonder, power 3 (+2)] - Your other green wonders get +○");
    /// ```
    #[must_use]
    pub fn detailed(&self) -> String {
        let counters = match self.counters {
            0 => String::new(),
            n if n > 0 => format!(" (+{n})"),
            n => format!(" ({n})"),
        };
        format!(
            "{} [{} {}, power {}{}] - {}",
            self.name,
            self.color.name(),
            self.card_type.name(),
            self.power,
            counters,
            self.effect
        )
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
