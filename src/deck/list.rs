//! Decklist text parsing.
//!
//! A decklist is plain text with one card name per line. Lines starting
//! with `#` are comments. A comment (or blank line) whose text contains
//! "extra deck" switches every following card line into the Extra Deck.
//!
//! The switch is one-directional: nothing in the format returns to the
//! Main Deck, so a second marker is a no-op. Marker text on a line that is
//! not a comment (`Extra Deck:` without `#`) is read as a card name.

use serde::{Deserialize, Serialize};

use super::counts::CardCount;

/// Comment prefix for decklist lines.
pub const COMMENT_MARKER: char = '#';

/// Lower-case text that flips parsing into the Extra Deck.
pub const EXTRA_DECK_MARKER: &str = "extra deck";

/// Deck section a card name belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckSection {
    /// Primary draw pile.
    Main,
    /// Summon-only pile (Fusion, Synchro, Xyz, Link).
    Extra,
}

/// Parsed decklist: two ordered sequences of card names.
///
/// Duplicates are kept - frequency matters. Every entry is non-empty and
/// trimmed, otherwise exactly as typed.
///
/// ## Example
///
/// ```
/// use ygo_deck::deck::DeckList;
///
/// let deck = DeckList::parse("Dark Magician\nDark Magician\n# Extra Deck\nStardust Dragon");
///
/// assert_eq!(deck.main_deck, vec!["Dark Magician", "Dark Magician"]);
/// assert_eq!(deck.extra_deck, vec!["Stardust Dragon"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckList {
    /// Main Deck entries in input order.
    pub main_deck: Vec<String>,

    /// Extra Deck entries in input order.
    pub extra_deck: Vec<String>,
}

impl DeckList {
    /// Create an empty decklist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw decklist text. Never fails; blank input gives an empty deck.
    #[must_use]
    pub fn parse(raw_text: &str) -> Self {
        let mut deck = Self::new();
        let mut section = DeckSection::Main;

        for line in raw_text.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                if line.to_lowercase().contains(EXTRA_DECK_MARKER) {
                    section = DeckSection::Extra;
                }
                continue;
            }

            deck.push(section, line);
        }

        deck
    }

    /// Append a card name to a section.
    pub fn push(&mut self, section: DeckSection, name: impl Into<String>) {
        let name = name.into();
        match section {
            DeckSection::Main => self.main_deck.push(name),
            DeckSection::Extra => self.extra_deck.push(name),
        }
    }

    /// Entries of one section.
    #[must_use]
    pub fn section(&self, section: DeckSection) -> &[String] {
        match section {
            DeckSection::Main => &self.main_deck,
            DeckSection::Extra => &self.extra_deck,
        }
    }

    /// Total entries across both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.main_deck.len() + self.extra_deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_deck.is_empty() && self.extra_deck.is_empty()
    }

    /// Iterate all entries with their section, Main Deck first.
    pub fn iter(&self) -> impl Iterator<Item = (DeckSection, &str)> {
        self.main_deck
            .iter()
            .map(|n| (DeckSection::Main, n.as_str()))
            .chain(self.extra_deck.iter().map(|n| (DeckSection::Extra, n.as_str())))
    }

    /// Distinct names across both sections, in first-seen order.
    #[must_use]
    pub fn distinct_names(&self) -> Vec<String> {
        let mut counts = CardCount::new();
        for (_, name) in self.iter() {
            counts.add(name);
        }
        counts.names().map(str::to_string).collect()
    }

    /// Occurrence counts for one section.
    #[must_use]
    pub fn counts(&self, section: DeckSection) -> CardCount {
        self.section(section).iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections() {
        let deck = DeckList::parse("Dark Magician\nDark Magician\n# Extra Deck\nStardust Dragon");

        assert_eq!(deck.main_deck, vec!["Dark Magician", "Dark Magician"]);
        assert_eq!(deck.extra_deck, vec!["Stardust Dragon"]);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(DeckList::parse("").is_empty());
        assert!(DeckList::parse("   \n\n\t\n").is_empty());
    }

    #[test]
    fn test_parse_trims_and_keeps_case() {
        let deck = DeckList::parse("   pot of GREED  \r\n\tRaigeki\n");
        assert_eq!(deck.main_deck, vec!["pot of GREED", "Raigeki"]);
    }

    #[test]
    fn test_comments_skipped() {
        let deck = DeckList::parse("# Main Deck\n# monsters\nKuriboh\n#Spells\nRaigeki");
        assert_eq!(deck.main_deck, vec!["Kuriboh", "Raigeki"]);
        assert!(deck.extra_deck.is_empty());
    }

    #[test]
    fn test_marker_case_insensitive() {
        let deck = DeckList::parse("Kuriboh\n## EXTRA DECK (15)\nBlue-Eyes Ultimate Dragon");
        assert_eq!(deck.extra_deck, vec!["Blue-Eyes Ultimate Dragon"]);
    }

    #[test]
    fn test_flip_is_one_directional() {
        let deck = DeckList::parse("A\n# extra deck\nB\n# Main Deck\nC\n# Extra Deck again\nD");
        assert_eq!(deck.main_deck, vec!["A"]);
        assert_eq!(deck.extra_deck, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_uncommented_marker_is_a_card() {
        let deck = DeckList::parse("Kuriboh\nExtra Deck:\nStardust Dragon");
        assert_eq!(deck.main_deck, vec!["Kuriboh", "Extra Deck:", "Stardust Dragon"]);
        assert!(deck.extra_deck.is_empty());
    }

    #[test]
    fn test_extra_alone_does_not_flip() {
        let deck = DeckList::parse("# extras below\nKuriboh");
        assert_eq!(deck.main_deck, vec!["Kuriboh"]);
    }

    #[test]
    fn test_distinct_names_first_seen() {
        let deck = DeckList::parse("B\nA\nB\n# Extra Deck\nC\nA");
        assert_eq!(deck.distinct_names(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_section_counts() {
        let deck = DeckList::parse("B\nA\nB\nB");
        let counts = deck.counts(DeckSection::Main);
        assert_eq!(counts.get("B"), 3);
        assert_eq!(counts.get("A"), 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_serialization_shape() {
        let deck = DeckList::parse("Kuriboh\n# Extra Deck\nStardust Dragon");
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["mainDeck"][0], "Kuriboh");
        assert_eq!(json["extraDeck"][0], "Stardust Dragon");
    }
}
