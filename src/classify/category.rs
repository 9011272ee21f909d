//! Primary card categories and their dispatch order.
//!
//! A card's category is decided from its free-text type string by an
//! ordered list of substring checks, first match wins. The order is part
//! of the contract: "Pendulum Effect Monster" is an effect monster, not a
//! pendulum monster, because `effect` is checked first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::CardRecord;

/// Primary category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    NormalMonster,
    EffectMonster,
    RitualMonster,
    FusionMonster,
    SynchroMonster,
    XyzMonster,
    LinkMonster,
    PendulumMonster,
    Spell,
    Trap,
    /// Unresolved card or unrecognized type string.
    Unknown,
}

/// Broad family, the key space of `card_types`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFamily {
    Monster,
    Spell,
    Trap,
    Unknown,
}

/// Monster sub-dispatch, checked in order after `monster` matched.
pub const MONSTER_PRECEDENCE: [(&str, CardCategory); 8] = [
    ("normal", CardCategory::NormalMonster),
    ("effect", CardCategory::EffectMonster),
    ("ritual", CardCategory::RitualMonster),
    ("fusion", CardCategory::FusionMonster),
    ("synchro", CardCategory::SynchroMonster),
    ("xyz", CardCategory::XyzMonster),
    ("link", CardCategory::LinkMonster),
    ("pendulum", CardCategory::PendulumMonster),
];

/// Bucket for monster types that match none of `MONSTER_PRECEDENCE`.
pub const DEFAULT_MONSTER_CATEGORY: CardCategory = CardCategory::EffectMonster;

impl CardCategory {
    /// All categories in dispatch order.
    pub const ALL: [CardCategory; 11] = [
        CardCategory::NormalMonster,
        CardCategory::EffectMonster,
        CardCategory::RitualMonster,
        CardCategory::FusionMonster,
        CardCategory::SynchroMonster,
        CardCategory::XyzMonster,
        CardCategory::LinkMonster,
        CardCategory::PendulumMonster,
        CardCategory::Spell,
        CardCategory::Trap,
        CardCategory::Unknown,
    ];

    /// Classify a type string such as "Synchro Tuner Monster".
    #[must_use]
    pub fn from_type(card_type: &str) -> Self {
        let lower = card_type.to_lowercase();

        if lower.contains("monster") {
            MONSTER_PRECEDENCE
                .iter()
                .find(|(needle, _)| lower.contains(needle))
                .map_or(DEFAULT_MONSTER_CATEGORY, |&(_, category)| category)
        } else if lower.contains("spell") {
            CardCategory::Spell
        } else if lower.contains("trap") {
            CardCategory::Trap
        } else {
            CardCategory::Unknown
        }
    }

    /// Classify a resolved record.
    #[must_use]
    pub fn of(card: &CardRecord) -> Self {
        Self::from_type(&card.card_type)
    }

    #[must_use]
    pub fn family(self) -> CardFamily {
        match self {
            CardCategory::Spell => CardFamily::Spell,
            CardCategory::Trap => CardFamily::Trap,
            CardCategory::Unknown => CardFamily::Unknown,
            _ => CardFamily::Monster,
        }
    }

    #[must_use]
    pub fn is_monster(self) -> bool {
        self.family() == CardFamily::Monster
    }

    /// Stable key used in report mappings.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            CardCategory::NormalMonster => "normal_monster",
            CardCategory::EffectMonster => "effect_monster",
            CardCategory::RitualMonster => "ritual_monster",
            CardCategory::FusionMonster => "fusion_monster",
            CardCategory::SynchroMonster => "synchro_monster",
            CardCategory::XyzMonster => "xyz_monster",
            CardCategory::LinkMonster => "link_monster",
            CardCategory::PendulumMonster => "pendulum_monster",
            CardCategory::Spell => "spell",
            CardCategory::Trap => "trap",
            CardCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl CardFamily {
    /// Key used in `card_types`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            CardFamily::Monster => "monsters",
            CardFamily::Spell => "spells",
            CardFamily::Trap => "traps",
            CardFamily::Unknown => "unknown",
        }
    }
}

/// Extra Deck summoning mechanic, checked against the raw type string.
///
/// Independent of `CardCategory` precedence: a "Fusion Effect Monster" is
/// an effect monster by category but still counts as Fusion here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraDeckKind {
    Fusion,
    Synchro,
    Xyz,
    Link,
    /// Extra Deck entry that is none of the above (misplaced card or unknown).
    Other,
}

impl ExtraDeckKind {
    #[must_use]
    pub fn from_type(card_type: &str) -> Self {
        let lower = card_type.to_lowercase();
        [
            ("fusion", ExtraDeckKind::Fusion),
            ("synchro", ExtraDeckKind::Synchro),
            ("xyz", ExtraDeckKind::Xyz),
            ("link", ExtraDeckKind::Link),
        ]
        .into_iter()
        .find(|(needle, _)| lower.contains(needle))
        .map_or(ExtraDeckKind::Other, |(_, kind)| kind)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ExtraDeckKind::Fusion => "fusion",
            ExtraDeckKind::Synchro => "synchro",
            ExtraDeckKind::Xyz => "xyz",
            ExtraDeckKind::Link => "link",
            ExtraDeckKind::Other => "other",
        }
    }
}

/// Spell subtype, from `race` or the type string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellKind {
    Normal,
    Continuous,
    QuickPlay,
    Ritual,
    Field,
    Equip,
}

/// Trap subtype, from `race` or the type string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapKind {
    Normal,
    Continuous,
    Counter,
}

impl SpellKind {
    /// Subtype of a spell record; `None` for non-spells.
    #[must_use]
    pub fn of(card: &CardRecord) -> Option<Self> {
        if CardCategory::of(card) != CardCategory::Spell {
            return None;
        }
        let lower = card.type_lower();
        let race = card.race_lower();
        let kind = [
            ("continuous", SpellKind::Continuous),
            ("quick-play", SpellKind::QuickPlay),
            ("ritual", SpellKind::Ritual),
            ("field", SpellKind::Field),
            ("equip", SpellKind::Equip),
        ]
        .into_iter()
        .find(|(needle, _)| race == *needle || lower.contains(needle))
        .map_or(SpellKind::Normal, |(_, kind)| kind);
        Some(kind)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SpellKind::Normal => "normal",
            SpellKind::Continuous => "continuous",
            SpellKind::QuickPlay => "quick_play",
            SpellKind::Ritual => "ritual",
            SpellKind::Field => "field",
            SpellKind::Equip => "equip",
        }
    }
}

impl TrapKind {
    /// Subtype of a trap record; `None` for non-traps.
    #[must_use]
    pub fn of(card: &CardRecord) -> Option<Self> {
        if CardCategory::of(card) != CardCategory::Trap {
            return None;
        }
        let lower = card.type_lower();
        let race = card.race_lower();
        let kind = [("continuous", TrapKind::Continuous), ("counter", TrapKind::Counter)]
            .into_iter()
            .find(|(needle, _)| race == *needle || lower.contains(needle))
            .map_or(TrapKind::Normal, |(_, kind)| kind);
        Some(kind)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TrapKind::Normal => "normal",
            TrapKind::Continuous => "continuous",
            TrapKind::Counter => "counter",
        }
    }
}
