//! Card identities with special rules.
//!
//! Every card name the engine knows rules for maps to a `CardKind`; any
//! other name becomes [`CardKind::Plain`], a card with no hooks at all.

use serde::{Deserialize, Serialize};

use super::behavior::CardBehavior;
use super::library::{events, peoples, wonders};

/// Identity of a card for rules dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    // Wonders
    Light,
    Moon,
    War,
    Rivers,
    Wisdom,
    Knowledge,
    Sky,
    Sun,
    Fire,
    Deserts,
    Forests,
    Mountains,
    Animals,
    Love,
    Seas,
    Stars,
    // Events
    Earthquake,
    Eruption,
    Meteorite,
    Miracle,
    Flashback,
    Prophecy,
    TimeWarp,
    Aurora,
    Darkness,
    Spring,
    Regrowth,
    Flood,
    Forgive,
    Unmaking,
    Revolt,
    Blessing,
    // Peoples
    Egyptians,
    Greeks,
    Vikings,
    Minoans,
    Babylonians,
    Romans,
    Judeans,
    /// No special rules.
    Plain,
}

impl CardKind {
    /// Every kind with rules attached, in catalogue order.
    pub const ALL: [CardKind; 39] = [
        CardKind::Light,
        CardKind::Moon,
        CardKind::War,
        CardKind::Rivers,
        CardKind::Wisdom,
        CardKind::Knowledge,
        CardKind::Sky,
        CardKind::Sun,
        CardKind::Fire,
        CardKind::Deserts,
        CardKind::Forests,
        CardKind::Mountains,
        CardKind::Animals,
        CardKind::Love,
        CardKind::Seas,
        CardKind::Stars,
        CardKind::Earthquake,
        CardKind::Eruption,
        CardKind::Meteorite,
        CardKind::Miracle,
        CardKind::Flashback,
        CardKind::Prophecy,
        CardKind::TimeWarp,
        CardKind::Aurora,
        CardKind::Darkness,
        CardKind::Spring,
        CardKind::Regrowth,
        CardKind::Flood,
        CardKind::Forgive,
        CardKind::Unmaking,
        CardKind::Revolt,
        CardKind::Blessing,
        CardKind::Egyptians,
        CardKind::Greeks,
        CardKind::Vikings,
        CardKind::Minoans,
        CardKind::Babylonians,
        CardKind::Romans,
        CardKind::Judeans,
    ];

    /// Look up the kind for a card name. Unknown names are `Plain`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Light" => CardKind::Light,
            "Moon" => CardKind::Moon,
            "War" => CardKind::War,
            "Rivers" => CardKind::Rivers,
            "Wisdom" => CardKind::Wisdom,
            "Knowledge" => CardKind::Knowledge,
            "Sky" => CardKind::Sky,
            "Sun" => CardKind::Sun,
            "Fire" => CardKind::Fire,
            "Deserts" => CardKind::Deserts,
            "Forests" => CardKind::Forests,
            "Mountains" => CardKind::Mountains,
            "Animals" => CardKind::Animals,
            "Love" => CardKind::Love,
            "Seas" => CardKind::Seas,
            "Stars" => CardKind::Stars,
            "Earthquake" => CardKind::Earthquake,
            "Eruption" => CardKind::Eruption,
            "Meteorite" => CardKind::Meteorite,
            "Miracle" => CardKind::Miracle,
            "Flashback" => CardKind::Flashback,
            "Prophecy" => CardKind::Prophecy,
            "Time Warp" => CardKind::TimeWarp,
            "Aurora" => CardKind::Aurora,
            "Darkness" => CardKind::Darkness,
            "Spring" => CardKind::Spring,
            "Regrowth" => CardKind::Regrowth,
            "Flood" => CardKind::Flood,
            "Forgive" => CardKind::Forgive,
            "Unmaking" => CardKind::Unmaking,
            "Revolt" => CardKind::Revolt,
            "Blessing" => CardKind::Blessing,
            "Egyptians" => CardKind::Egyptians,
            "Greeks" => CardKind::Greeks,
            "Vikings" => CardKind::Vikings,
            "Minoans" => CardKind::Minoans,
            "Babylonians" => CardKind::Babylonians,
            "Romans" => CardKind::Romans,
            "Judeans" => CardKind::Judeans,
            _ => CardKind::Plain,
        }
    }

    /// Display name of the kind (`None` for `Plain`).
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            CardKind::Light => "Light",
            CardKind::Moon => "Moon",
            CardKind::War => "War",
            CardKind::Rivers => "Rivers",
            CardKind::Wisdom => "Wisdom",
            CardKind::Knowledge => "Knowledge",
            CardKind::Sky => "Sky",
            CardKind::Sun => "Sun",
            CardKind::Fire => "Fire",
            CardKind::Deserts => "Deserts",
            CardKind::Forests => "Forests",
            CardKind::Mountains => "Mountains",
            CardKind::Animals => "Animals",
            CardKind::Love => "Love",
            CardKind::Seas => "Seas",
            CardKind::Stars => "Stars",
            CardKind::Earthquake => "Earthquake",
            CardKind::Eruption => "Eruption",
            CardKind::Meteorite => "Meteorite",
            CardKind::Miracle => "Miracle",
            CardKind::Flashback => "Flashback",
            CardKind::Prophecy => "Prophecy",
            CardKind::TimeWarp => "Time Warp",
            CardKind::Aurora => "Aurora",
            CardKind::Darkness => "Darkness",
            CardKind::Spring => "Spring",
            CardKind::Regrowth => "Regrowth",
            CardKind::Flood => "Flood",
            CardKind::Forgive => "Forgive",
            CardKind::Unmaking => "Unmaking",
            CardKind::Revolt => "Revolt",
            CardKind::Blessing => "Blessing",
            CardKind::Egyptians => "Egyptians",
            CardKind::Greeks => "Greeks",
            CardKind::Vikings => "Vikings",
            CardKind::Minoans => "Minoans",
            CardKind::Babylonians => "Babylonians",
            CardKind::Romans => "Romans",
            CardKind::Judeans => "Judeans",
            CardKind::Plain => return None,
        })
    }

    /// Hook table for this kind.
    #[must_use]
    pub fn behavior(self) -> &'static CardBehavior {
        match self {
            CardKind::Light => &wonders::LIGHT,
            CardKind::Moon => &wonders::MOON,
            CardKind::War => &wonders::WAR,
            CardKind::Rivers => &wonders::RIVERS,
            CardKind::Wisdom => &wonders::WISDOM,
            CardKind::Knowledge => &wonders::KNOWLEDGE,
            CardKind::Sky => &wonders::SKY,
            CardKind::Sun => &wonders::SUN,
            CardKind::Fire => &wonders::FIRE,
            CardKind::Deserts => &wonders::DESERTS,
            CardKind::Forests => &wonders::FORESTS,
            CardKind::Mountains => &wonders::MOUNTAINS,
            CardKind::Animals => &wonders::ANIMALS,
            CardKind::Love => &wonders::LOVE,
            CardKind::Seas => &wonders::SEAS,
            CardKind::Stars => &wonders::STARS,
            CardKind::Earthquake => &events::EARTHQUAKE,
            CardKind::Eruption => &events::ERUPTION,
            CardKind::Meteorite => &events::METEORITE,
            CardKind::Miracle => &events::MIRACLE,
            CardKind::Flashback => &events::FLASHBACK,
            CardKind::Prophecy => &events::PROPHECY,
            CardKind::TimeWarp => &events::TIME_WARP,
            CardKind::Aurora => &events::AURORA,
            CardKind::Darkness => &events::DARKNESS,
            CardKind::Spring => &events::SPRING,
            CardKind::Regrowth => &events::REGROWTH,
            CardKind::Flood => &events::FLOOD,
            CardKind::Forgive => &events::FORGIVE,
            CardKind::Unmaking => &events::UNMAKING,
            CardKind::Revolt => &events::REVOLT,
            CardKind::Blessing => &events::BLESSING,
            CardKind::Egyptians => &peoples::EGYPTIANS,
            CardKind::Greeks => &peoples::GREEKS,
            CardKind::Vikings => &peoples::VIKINGS,
            CardKind::Minoans => &peoples::MINOANS,
            CardKind::Babylonians => &peoples::BABYLONIANS,
            CardKind::Romans => &peoples::ROMANS,
            CardKind::Judeans => &peoples::JUDEANS,
            CardKind::Plain => &CardBehavior::NONE,
        }
    }
}
