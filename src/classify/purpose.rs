//! Card purpose tagging: what role a card plays in a deck.
//!
//! Purposes come from two sources: curated name lists for well-known
//! hand traps and board breakers, and patterns over the card text for
//! generic roles (searching, drawing, negating, extending).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardRecord;

use super::category::CardCategory;

/// Role a card plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPurpose {
    /// Activated from the hand on the opponent's turn.
    HandTrap,
    /// Clears an established board.
    BoardBreaker,
    /// Adds cards from the Deck to the hand.
    Searcher,
    /// Draws cards.
    Draw,
    /// Negates cards or effects.
    Negate,
    /// Special Summons additional bodies.
    Extender,
}

impl CardPurpose {
    pub const ALL: [CardPurpose; 6] = [
        CardPurpose::HandTrap,
        CardPurpose::BoardBreaker,
        CardPurpose::Searcher,
        CardPurpose::Draw,
        CardPurpose::Negate,
        CardPurpose::Extender,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            CardPurpose::HandTrap => "handtraps",
            CardPurpose::BoardBreaker => "board_breakers",
            CardPurpose::Searcher => "searchers",
            CardPurpose::Draw => "draw",
            CardPurpose::Negate => "negates",
            CardPurpose::Extender => "extenders",
        }
    }
}

impl fmt::Display for CardPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Purposes of one card, in `CardPurpose` order.
pub type Purposes = SmallVec<[CardPurpose; 4]>;

/// Well-known hand traps.
pub const KNOWN_HANDTRAPS: &[&str] = &[
    "Ash Blossom & Joyous Spring",
    "Effect Veiler",
    "Ghost Ogre & Snow Rabbit",
    "Ghost Belle & Haunted Mansion",
    "Ghost Mourner & Moonlit Chill",
    "D.D. Crow",
    "PSY-Framegear Gamma",
    "Nibiru, the Primal Being",
    "Infinite Impermanence",
    "Maxx \"C\"",
    "Droll & Lock Bird",
    "Mulcharmy Fuwalos",
    "Dimension Shifter",
];

/// Well-known board breakers. Entries match as name prefixes, so "Kaiju"
/// covers every Kaiju monster.
pub const KNOWN_BOARD_BREAKERS: &[&str] = &[
    "Raigeki",
    "Dark Hole",
    "Lightning Storm",
    "Evenly Matched",
    "Harpie's Feather Duster",
    "Twin Twisters",
    "Cosmic Cyclone",
    "Droll & Lock Bird",
    "Lava Golem",
    "Ra - Sphere Mode",
    "Forbidden Droplet",
    "Triple Tactics Talent",
    "Dark Ruler No More",
    "Kaiju",
];

static NEGATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bnegate").expect("valid regex"));
static SEARCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\badd\b[^.]*\bfrom your deck to your hand").expect("valid regex"));
static DRAW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bdraw (\d+|one|two|three) cards?").expect("valid regex"));
static SPECIAL_SUMMON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)special summon (this card|1|it|up to)").expect("valid regex"));
static FROM_HAND_QUICK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\(quick effect\)|during either player's turn).*(discard this card|send this card from your hand|reveal this card)")
        .expect("valid regex")
});
static BOARD_WIPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(destroy|banish|shuffle|send to the gy) all (cards|monsters|spell|face-up)[^.]*your opponent controls")
        .expect("valid regex")
});

/// Tags cards with their purposes.
#[derive(Clone, Debug)]
pub struct PurposeTagger {
    handtraps: Vec<String>,
    board_breakers: Vec<String>,
}

impl Default for PurposeTagger {
    fn default() -> Self {
        Self {
            handtraps: KNOWN_HANDTRAPS.iter().map(|s| s.to_string()).collect(),
            board_breakers: KNOWN_BOARD_BREAKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PurposeTagger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names to the hand-trap list.
    #[must_use]
    pub fn with_handtraps<I: IntoIterator<Item = String>>(mut self, names: I) -> Self {
        self.handtraps.extend(names);
        self
    }

    /// Add names to the board-breaker list.
    #[must_use]
    pub fn with_board_breakers<I: IntoIterator<Item = String>>(mut self, names: I) -> Self {
        self.board_breakers.extend(names);
        self
    }

    /// All purposes of a resolved card, deduplicated and ordered.
    #[must_use]
    pub fn tag(&self, card: &CardRecord) -> Purposes {
        let mut purposes = Purposes::new();
        let text = card.description.as_str();
        let category = CardCategory::of(card);

        if self.is_handtrap(card, category) {
            purposes.push(CardPurpose::HandTrap);
        }
        if self.board_breakers.iter().any(|b| card.name.starts_with(b.as_str()))
            || (!category.is_monster() && BOARD_WIPE.is_match(text))
        {
            purposes.push(CardPurpose::BoardBreaker);
        }
        if SEARCH.is_match(text) {
            purposes.push(CardPurpose::Searcher);
        }
        if DRAW.is_match(text) {
            purposes.push(CardPurpose::Draw);
        }
        if NEGATE.is_match(text) {
            purposes.push(CardPurpose::Negate);
        }
        if category.is_monster() && SPECIAL_SUMMON.is_match(text) {
            purposes.push(CardPurpose::Extender);
        }

        purposes
    }

    fn is_handtrap(&self, card: &CardRecord, category: CardCategory) -> bool {
        if self.handtraps.iter().any(|h| h == &card.name) {
            return true;
        }
        category.is_monster() && FROM_HAND_QUICK.is_match(&card.description)
    }
}
