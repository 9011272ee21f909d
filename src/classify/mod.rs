//! Composition classifier: category, archetype and purpose of each card.
//!
//! ## Key Types
//!
//! - `CardCategory`: Primary category, decided by a precedence table
//! - `ArchetypeTagger`: Name-based archetype tagging with provider fallback
//! - `PurposeTagger`: Role tags (hand trap, searcher, ...)
//! - `EngineDetector`: Known engine packages by member cards
//! - `Classifier`: Combines the above into one `Classification` per card
//!
//! Classification is a pure function of the record: no randomness, no
//! hidden state. Unresolved cards are `Unknown` with no tags.

pub mod archetype;
pub mod category;
pub mod engines;
pub mod purpose;

pub use archetype::{ArchetypeTagger, DEFAULT_ARCHETYPES};
pub use category::{
    CardCategory, CardFamily, ExtraDeckKind, SpellKind, TrapKind, DEFAULT_MONSTER_CATEGORY,
    MONSTER_PRECEDENCE,
};
pub use engines::{Engine, EngineDetector};
pub use purpose::{CardPurpose, PurposeTagger, Purposes, KNOWN_BOARD_BREAKERS, KNOWN_HANDTRAPS};

use serde::{Deserialize, Serialize};

use crate::cards::CardRecord;

/// Everything the aggregator needs to know about one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: CardCategory,
    pub archetype: Option<String>,
    pub purposes: Purposes,
}

impl Classification {
    /// Classification of a card that failed to resolve.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            category: CardCategory::Unknown,
            archetype: None,
            purposes: Purposes::new(),
        }
    }

    #[must_use]
    pub fn family(&self) -> CardFamily {
        self.category.family()
    }

    #[must_use]
    pub fn has_purpose(&self, purpose: CardPurpose) -> bool {
        self.purposes.contains(&purpose)
    }
}

/// Classifies resolved cards.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    archetypes: ArchetypeTagger,
    purposes: PurposeTagger,
}

impl Classifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_archetypes(mut self, archetypes: ArchetypeTagger) -> Self {
        self.archetypes = archetypes;
        self
    }

    #[must_use]
    pub fn with_purposes(mut self, purposes: PurposeTagger) -> Self {
        self.purposes = purposes;
        self
    }

    #[must_use]
    pub fn classify(&self, card: &CardRecord) -> Classification {
        Classification {
            category: CardCategory::of(card),
            archetype: self.archetypes.tag(card),
            purposes: self.purposes.tag(card),
        }
    }

    /// Classify an optional record; `None` is an unresolved card.
    #[must_use]
    pub fn classify_opt(&self, card: Option<&CardRecord>) -> Classification {
        card.map_or_else(Classification::unknown, |card| self.classify(card))
    }

    #[must_use]
    pub fn archetype_tagger(&self) -> &ArchetypeTagger {
        &self.archetypes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_record() {
        let classifier = Classifier::new();
        let card = CardRecord::new("Snake-Eye Ash", "Effect Monster")
            .with_description("If this card is Normal or Special Summoned: You can add 1 Level 1 FIRE monster from your Deck to your hand.");
        let class = classifier.classify(&card);
        assert_eq!(class.category, CardCategory::EffectMonster);
        assert_eq!(class.archetype.as_deref(), Some("Snake-Eye"));
        assert!(class.has_purpose(CardPurpose::Searcher));
    }

    #[test]
    fn test_unresolved_is_unknown() {
        let classifier = Classifier::new();
        let class = classifier.classify_opt(None);
        assert_eq!(class, Classification::unknown());
        assert_eq!(class.family(), CardFamily::Unknown);
    }

    #[test]
    fn test_deterministic() {
        let classifier = Classifier::new();
        let card = CardRecord::new("Blue-Eyes White Dragon", "Normal Monster");
        assert_eq!(classifier.classify(&card), classifier.classify(&card));
    }
}
