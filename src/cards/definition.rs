//! Card records - the static data a card is created from.
//!
//! A `CardRecord` is what a card data source yields: name, type, colour,
//! printed power and rules text. Instance state (counters, destroyed flag,
//! owner, zone) lives on [`Card`](super::Card).

use serde::{Deserialize, Serialize};

/// The three card types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Stays in play and modifies the game while there.
    Wonder,
    /// One-shot effect, goes to the discard when played.
    Event,
    /// Scoring card in the shared pool, controlled by whoever meets its condition.
    People,
}

impl CardType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Wonder => "wonder",
            CardType::Event => "event",
            CardType::People => "people",
        }
    }
}

/// Card colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Green,
    Blue,
    Red,
    Yellow,
}

impl CardColor {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardColor::Green => "green",
            CardColor::Blue => "blue",
            CardColor::Red => "red",
            CardColor::Yellow => "yellow",
        }
    }
}

/// Static card data as loaded from a card source.
///
/// Field names follow the card data file format (`type` rather than
/// `card_type`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub color: CardColor,
    /// Printed power. Only People cards keep it; wonders and events get
    /// their power assigned at setup.
    #[serde(default)]
    pub power: i32,
    #[serde(default)]
    pub effect: String,
}

impl CardRecord {
    pub fn new(
        name: impl Into<String>,
        card_type: CardType,
        color: CardColor,
        power: i32,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            card_type,
            color,
            power,
            effect: effect.into(),
        }
    }

    #[must_use]
    pub fn is_people(&self) -> bool {
        self.card_type == CardType::People
    }
}
