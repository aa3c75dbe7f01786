//! Card data sources.
//!
//! Card records are loaded once at setup through a [`CardSource`]: the
//! built-in catalogue, or a JSON file with a list of
//! `{name, type, color, power, effect}` objects.

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use super::definition::{CardColor, CardRecord, CardType};
use crate::error::{GodsError, Result};

/// Anything that can produce the list of card records for a game.
pub trait CardSource {
    fn load(&self) -> Result<Vec<CardRecord>>;
}

/// The standard card set.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCatalog;

use CardColor::{Blue, Green, Red, Yellow};
use CardType::{Event, People, Wonder};

const BUILTIN: &[(&str, CardType, CardColor, i32, &str)] = &[
    ("Light", Wonder, Yellow, 0, "When you declare the end, you may play a card with power ○ or less."),
    ("Moon", Wonder, Blue, 0, "At the end of your turn, draw until you have more than ○ cards in hand."),
    ("War", Wonder, Red, 0, "When you pass, you may destroy a People with power ○ or less."),
    ("Rivers", Wonder, Blue, 0, "When you pass, you may restore a People."),
    ("Wisdom", Wonder, Yellow, 0, "When you pass, you may play a card with power ○ or less."),
    ("Knowledge", Wonder, Blue, 0, "Your opponent's events get -○ (minimum 1)."),
    ("Sky", Wonder, Blue, 0, "Your other blue wonders get +○."),
    ("Sun", Wonder, Yellow, 0, "Your other green wonders get +○."),
    ("Fire", Wonder, Red, 0, "Your red events get +○."),
    ("Deserts", Wonder, Yellow, 0, "You score your destroyed Peoples with power ○ or less."),
    ("Forests", Wonder, Green, 0, "When you pass, you may restore a People with power ○ or less."),
    ("Mountains", Wonder, Green, 0, "Your Peoples with power ○ or less are indestructible."),
    ("Animals", Wonder, Green, 0, "Worth ○ points."),
    ("Love", Wonder, Red, 0, "Your Peoples are worth ○ extra points."),
    ("Seas", Wonder, Blue, 0, "Your Peoples with power ○ or less are worth +1."),
    ("Stars", Wonder, Blue, 0, "When you draw, you may draw from the shared deck instead. That card has power ○."),
    ("Earthquake", Event, Green, 0, "Destroy every People with power ○ or less."),
    ("Eruption", Event, Red, 0, "Shuffle up to ○ blue wonders with power ○ or less into their owners' decks."),
    ("Meteorite", Event, Red, 0, "Destroy every People your opponent controls with power ○ or less."),
    ("Miracle", Event, Yellow, 0, "Play an event from your hand with ○ +1 counters."),
    ("Flashback", Event, Blue, 0, "Return up to ○ events from your discard to your hand."),
    ("Prophecy", Event, Yellow, 0, "Play up to ○ cards."),
    ("Time Warp", Event, Blue, 0, "Return up to ○ wonders to their owners' hands."),
    ("Aurora", Event, Blue, 0, "Draw ○ cards."),
    ("Darkness", Event, Red, 0, "Your opponent discards ○ cards."),
    ("Spring", Event, Green, 0, "Put ○ +1 counters on an undestroyed People."),
    ("Regrowth", Event, Green, 0, "Restore a People with power ○ or less."),
    ("Flood", Event, Blue, 0, "Put ○ -1 counters on every People."),
    ("Forgive", Event, Yellow, 0, "Put ○ +1 counters on a People."),
    ("Unmaking", Event, Red, 0, "Destroy a wonder with power ○ or less."),
    ("Revolt", Event, Red, 0, "Destroy a People with power ○ or less."),
    ("Blessing", Event, Yellow, 0, "Put ○ +1 counters on a wonder."),
    ("Egyptians", People, Green, 3, "You have the most total power among green wonders."),
    ("Greeks", People, Yellow, 4, "You have twice or more cards in hand than your opponent."),
    ("Vikings", People, Blue, 3, "You have the most cards in your deck."),
    ("Minoans", People, Blue, 2, "You have the most wonders."),
    ("Babylonians", People, Yellow, 4, "You have the most total power among wonders."),
    ("Romans", People, Red, 3, "You have the most total power among red wonders."),
    ("Judeans", People, Blue, 3, "You have the most total power among blue wonders."),
];

impl CardSource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<CardRecord>> {
        Ok(BUILTIN
            .iter()
            .map(|&(name, card_type, color, power, effect)| {
                CardRecord::new(name, card_type, color, power, effect)
            })
            .collect())
    }
}

/// Card records stored as a JSON array on disk.
#[derive(Clone, Debug)]
pub struct JsonCardFile {
    pub path: PathBuf,
}

impl JsonCardFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CardSource for JsonCardFile {
    fn load(&self) -> Result<Vec<CardRecord>> {
        let text = std::fs::read_to_string(&self.path)?;
        parse_records(&text)
    }
}

/// Parse a JSON array of card records.
pub fn parse_records(json: &str) -> Result<Vec<CardRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Name lookup over a loaded card list.
#[derive(Clone, Debug, Default)]
pub struct CardIndex {
    records: Vec<CardRecord>,
    by_name: FxHashMap<String, usize>,
}

impl CardIndex {
    #[must_use]
    pub fn new(records: Vec<CardRecord>) -> Self {
        let by_name = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.name.clone(), index))
            .collect();
        Self { records, by_name }
    }

    /// Load and index every record of a source.
    pub fn from_source(source: &dyn CardSource) -> Result<Self> {
        Ok(Self::new(source.load()?))
    }

    pub fn get(&self, name: &str) -> Result<&CardRecord> {
        self.by_name
            .get(name)
            .map(|&index| &self.records[index])
            .ok_or_else(|| GodsError::UnknownCard(name.to_string()))
    }

    /// Wonders and events, in catalogue order.
    pub fn playable(&self) -> impl Iterator<Item = &CardRecord> {
        self.records.iter().filter(|record| !record.is_people())
    }

    pub fn peoples(&self) -> impl Iterator<Item = &CardRecord> {
        self.records.iter().filter(|record| record.is_people())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_builtin_covers_every_kind() {
        let index = CardIndex::from_source(&BuiltinCatalog).unwrap();
        assert_eq!(index.len(), CardKind::ALL.len());
        for kind in CardKind::ALL {
            let name = kind.name().unwrap();
            assert!(index.get(name).is_ok(), "{name} missing from the catalogue");
        }
        assert_eq!(index.playable().count(), 32);
        assert_eq!(index.peoples().count(), 7);
    }

    #[test]
    fn test_unknown_card() {
        let index = CardIndex::from_source(&BuiltinCatalog).unwrap();
        match index.get("Dragons") {
            Err(GodsError::UnknownCard(name)) => assert_eq!(name, "Dragons"),
            other => panic!("expected UnknownCard, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"name": "Sky", "type": "wonder", "color": "blue", "effect": "Your other blue wonders get +○."},
            {"name": "Greeks", "type": "people", "color": "yellow", "power": 4}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].power, 0);
        assert_eq!(records[1].card_type, CardType::People);
        assert_eq!(records[1].power, 4);
    }

    #[test]
    fn test_parse_records_rejects_bad_type() {
        let json = r#"[{"name": "Sky", "type": "artifact", "color": "blue"}]"#;
        assert!(matches!(parse_records(json), Err(GodsError::CardData(_))));
    }

    #[test]
    fn test_missing_file() {
        let source = JsonCardFile::new("/nonexistent/cards.json");
        assert!(matches!(source.load(), Err(GodsError::Io(_))));
    }
}
