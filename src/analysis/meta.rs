//! Reference meta profile and the deck-vs-meta comparison.
//!
//! A `MetaProfile` file is an overlay: maps in the file extend the
//! built-in maps (file entries win on key clashes) and lists are appended.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::LimitStatus;
use crate::config::ConfigError;
use crate::deck::DeckSection;

use super::composition::DeckProfile;

/// Staples every competitive deck is measured against.
pub const DEFAULT_STAPLES: &[&str] = &[
    "Ash Blossom & Joyous Spring",
    "Maxx \"C\"",
    "Infinite Impermanence",
    "Effect Veiler",
    "Ghost Ogre & Snow Rabbit",
    "Nibiru, the Primal Being",
    "Called by the Grave",
    "Crossout Designator",
    "Pot of Prosperity",
    "Pot of Desires",
    "Triple Tactics Talent",
    "Forbidden Droplet",
    "Harpie's Feather Duster",
    "Lightning Storm",
    "Dark Ruler No More",
    "Solemn Judgment",
];

/// Reference data about the current competitive environment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaProfile {
    /// Archetype -> tier label ("Tier 1", "Rogue", ...).
    pub tier_list: BTreeMap<String, String>,
    /// Widely played generic cards.
    pub staple_cards: Vec<String>,
    /// Top deck name -> its key cards.
    pub top_decks: BTreeMap<String, Vec<String>>,
    /// Card -> share of top decks running it, in [0, 1].
    pub card_popularity: BTreeMap<String, f64>,
    /// Archetype -> archetypes and engines it pairs well with.
    pub archetype_synergies: BTreeMap<String, Vec<String>>,
    /// Main Deck family key -> typical share, in [0, 1].
    pub type_ratios: BTreeMap<String, f64>,
}

impl MetaProfile {
    /// Built-in reference profile.
    #[must_use]
    pub fn builtin() -> Self {
        let tier_list = [
            ("Snake-Eye", "Tier 1"),
            ("Fiendsmith", "Tier 1"),
            ("Tearlaments", "Tier 2"),
            ("Branded", "Tier 2"),
            ("Spright", "Tier 2"),
            ("Swordsoul", "Tier 3"),
            ("Crystal Beast", "Rogue"),
            ("Dark Magician", "Rogue"),
            ("Blue-Eyes", "Rogue"),
        ];
        let synergies = [
            ("Snake-Eye", vec!["Fiendsmith", "Diabellstar"]),
            ("Crystal Beast", vec!["Ultimate Crystal", "Rainbow Bridge"]),
            ("Branded", vec!["Despia", "Dogmatika"]),
            ("Swordsoul", vec!["Tenyi"]),
        ];
        Self {
            tier_list: tier_list
                .iter()
                .map(|(a, t)| (a.to_string(), t.to_string()))
                .collect(),
            staple_cards: DEFAULT_STAPLES.iter().map(|s| s.to_string()).collect(),
            top_decks: BTreeMap::new(),
            card_popularity: BTreeMap::new(),
            archetype_synergies: synergies
                .into_iter()
                .map(|(a, s)| (a.to_string(), s.into_iter().map(str::to_string).collect()))
                .collect(),
            type_ratios: [("monsters", 0.45), ("spells", 0.35), ("traps", 0.20)]
                .iter()
                .map(|(k, r)| (k.to_string(), *r))
                .collect(),
        }
    }

    /// Apply an overlay: maps extend, lists append.
    #[must_use]
    pub fn merged(mut self, overlay: MetaProfile) -> Self {
        self.tier_list.extend(overlay.tier_list);
        for staple in overlay.staple_cards {
            if !self.staple_cards.contains(&staple) {
                self.staple_cards.push(staple);
            }
        }
        self.top_decks.extend(overlay.top_decks);
        self.card_popularity.extend(overlay.card_popularity);
        self.archetype_synergies.extend(overlay.archetype_synergies);
        self.type_ratios.extend(overlay.type_ratios);
        self
    }

    /// Built-in profile merged with a JSON overlay file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let overlay: MetaProfile = crate::config::load_json(path.as_ref())?;
        Ok(Self::builtin().merged(overlay))
    }

    /// Label -> note comparing a deck to this profile. Empty for an empty deck.
    #[must_use]
    pub fn compare(&self, profile: &DeckProfile<'_>, main_archetype: Option<&str>) -> BTreeMap<String, String> {
        let mut notes = BTreeMap::new();
        let deck = profile.deck();
        if deck.is_empty() {
            return notes;
        }

        if let Some(archetype) = main_archetype {
            let note = match self.tier_list.get(archetype) {
                Some(tier) => format!("{archetype} is rated {tier} in the current meta"),
                None => format!("{archetype} is not on the current tier list"),
            };
            notes.insert("archetype".to_string(), note);

            if let Some(partners) = self.archetype_synergies.get(archetype) {
                if !partners.is_empty() {
                    notes.insert(
                        "synergies".to_string(),
                        format!("{archetype} pairs well with {}", partners.join(", ")),
                    );
                }
            }
        }

        let restricted = profile.restricted_cards();
        let banlist = if restricted.is_empty() {
            "No Forbidden, Limited or Semi-Limited cards".to_string()
        } else {
            LimitStatus::RESTRICTED
                .iter()
                .filter_map(|status| {
                    restricted
                        .get(status)
                        .map(|names| format!("{}: {}", status.label(), names.join(", ")))
                })
                .collect::<Vec<_>>()
                .join("; ")
        };
        notes.insert("banlist".to_string(), banlist);

        if !self.staple_cards.is_empty() {
            let mut present: Vec<&str> = profile
                .resolved_names()
                .filter(|name| self.staple_cards.iter().any(|s| s.as_str() == *name))
                .collect();
            present.sort_unstable();
            present.dedup();
            notes.insert(
                "staples".to_string(),
                format!("Runs {} of {} common staples", present.len(), self.staple_cards.len()),
            );
        }

        let main_total = deck.main_deck.len();
        if main_total > 0 {
            let mut by_family: BTreeMap<&str, usize> = BTreeMap::new();
            for (section, _, card) in profile.entries() {
                if section == DeckSection::Main {
                    *by_family.entry(card.class.family().key()).or_default() += 1;
                }
            }
            for (family, typical) in &self.type_ratios {
                let share = by_family.get(family.as_str()).copied().unwrap_or(0) as f64 / main_total as f64;
                notes.insert(
                    format!("{family}_ratio"),
                    format!(
                        "{:.0}% of the Main Deck vs. {:.0}% typical",
                        share * 100.0,
                        typical * 100.0
                    ),
                );
            }
        }

        let names: Vec<&str> = profile.resolved_names().collect();
        let best = self
            .top_decks
            .iter()
            .map(|(deck_name, key_cards)| {
                let shared = key_cards.iter().filter(|c| names.contains(&c.as_str())).count();
                (deck_name, shared)
            })
            .filter(|(_, shared)| *shared > 0)
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)));
        if let Some((deck_name, shared)) = best {
            notes.insert(
                "closest_top_deck".to_string(),
                format!("Shares {shared} key cards with {deck_name}"),
            );
        }

        if !self.card_popularity.is_empty() {
            let mut popular: Vec<(&str, f64)> = names
                .iter()
                .filter_map(|n| self.card_popularity.get(*n).map(|p| (*n, *p)))
                .collect();
            popular.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            popular.dedup_by(|a, b| a.0 == b.0);
            if let Some((card, share)) = popular.first() {
                notes.insert(
                    "most_popular_card".to_string(),
                    format!("{card} appears in {:.0}% of top decks", share * 100.0),
                );
            }
        }

        notes
    }
}
