//! Per-deck classification and composition counts.
//!
//! `DeckProfile` classifies every distinct name of a decklist once and
//! answers count queries over both sections. `CompositionSummary` is the
//! serializable breakdown embedded in the report.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardRecord, LimitStatus};
use crate::classify::{
    CardCategory, CardFamily, CardPurpose, Classification, Classifier, ExtraDeckKind, SpellKind, TrapKind,
};
use crate::deck::{DeckList, DeckSection};
use crate::resolver::ResolvedCards;

/// A distinct card of the deck with its classification.
#[derive(Clone, Debug)]
pub struct ProfiledCard<'a> {
    pub record: Option<&'a CardRecord>,
    pub class: Classification,
}

impl ProfiledCard<'_> {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.record.is_some()
    }
}

/// A card run at more copies than the Forbidden & Limited list allows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitViolation {
    /// Canonical name, or the typed name for unresolved cards.
    pub name: String,
    pub copies: u32,
    pub allowed: u32,
    pub status: LimitStatus,
}

/// Classified view of one decklist.
#[derive(Debug)]
pub struct DeckProfile<'a> {
    deck: &'a DeckList,
    cards: FxHashMap<&'a str, ProfiledCard<'a>>,
}

impl<'a> DeckProfile<'a> {
    /// Classify every distinct name. Names without a record are unknown.
    pub fn build(deck: &'a DeckList, resolved: &'a ResolvedCards, classifier: &Classifier) -> Self {
        let mut cards = FxHashMap::default();
        for (_, name) in deck.iter() {
            cards.entry(name).or_insert_with(|| {
                let record = resolved.get(name);
                ProfiledCard {
                    record,
                    class: classifier.classify_opt(record),
                }
            });
        }
        Self { deck, cards }
    }

    #[must_use]
    pub fn deck(&self) -> &DeckList {
        self.deck
    }

    #[must_use]
    pub fn card(&self, name: &str) -> Option<&ProfiledCard<'a>> {
        self.cards.get(name)
    }

    /// Every entry of both sections with its profile, Main Deck first.
    pub fn entries(&self) -> impl Iterator<Item = (DeckSection, &str, &ProfiledCard<'a>)> + '_ {
        self.deck
            .iter()
            .filter_map(move |(section, name)| self.cards.get(name).map(|card| (section, name, card)))
    }

    /// Copies across both sections matching a predicate.
    pub fn count_where<F>(&self, mut predicate: F) -> u32
    where
        F: FnMut(DeckSection, &ProfiledCard<'a>) -> bool,
    {
        let mut total = 0;
        for (section, _, card) in self.entries() {
            if predicate(section, card) {
                total += 1;
            }
        }
        total
    }

    /// Copies with a purpose.
    #[must_use]
    pub fn purpose_count(&self, purpose: CardPurpose) -> u32 {
        self.count_where(|_, card| card.class.has_purpose(purpose))
    }

    /// Copies in a family.
    #[must_use]
    pub fn family_count(&self, family: CardFamily) -> u32 {
        self.count_where(|_, card| card.class.family() == family)
    }

    /// Copies whose name is in `names`.
    #[must_use]
    pub fn named_count(&self, names: &[String]) -> u32 {
        self.count_where(|_, card| card.record.is_some_and(|r| names.iter().any(|n| n == &r.name)))
    }

    /// Distinct resolved Main Deck cards run at `copies` or more.
    #[must_use]
    pub fn playsets(&self, copies: u32) -> u32 {
        let counts = self.deck.counts(DeckSection::Main);
        let found = counts
            .iter()
            .filter(|(name, n)| *n >= copies && self.cards.get(*name).is_some_and(ProfiledCard::is_resolved))
            .count();
        u32::try_from(found).unwrap_or(u32::MAX)
    }

    /// Cards over their copy limit, in first-seen order.
    ///
    /// Copies are summed across both sections and across typed spellings
    /// that resolved to the same card. Unresolved names are held to
    /// `max_copies`.
    #[must_use]
    pub fn limit_violations(&self, max_copies: u32) -> Vec<LimitViolation> {
        let mut order: Vec<(&str, LimitStatus)> = Vec::new();
        let mut copies: FxHashMap<&str, u32> = FxHashMap::default();
        for (_, typed, card) in self.entries() {
            let (name, status) = match card.record {
                Some(record) => (record.name.as_str(), record.limit_status()),
                None => (typed, LimitStatus::Unlimited),
            };
            let count = copies.entry(name).or_insert(0);
            if *count == 0 {
                order.push((name, status));
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter_map(|(name, status)| {
                let copies = copies.get(name).copied().unwrap_or(0);
                let allowed = status.allowed_copies(max_copies);
                (copies > allowed).then(|| LimitViolation {
                    name: name.to_string(),
                    copies,
                    allowed,
                    status,
                })
            })
            .collect()
    }

    /// Distinct resolved cards per restricted status, names sorted.
    #[must_use]
    pub fn restricted_cards(&self) -> BTreeMap<LimitStatus, Vec<String>> {
        let mut restricted: BTreeMap<LimitStatus, Vec<String>> = BTreeMap::new();
        for card in self.cards.values() {
            if let Some(record) = card.record {
                let status = record.limit_status();
                if status != LimitStatus::Unlimited {
                    let names = restricted.entry(status).or_default();
                    if !names.contains(&record.name) {
                        names.push(record.name.clone());
                    }
                }
            }
        }
        for names in restricted.values_mut() {
            names.sort_unstable();
        }
        restricted
    }

    /// Resolved Extra Deck entries.
    #[must_use]
    pub fn resolved_extra(&self) -> u32 {
        self.count_where(|section, card| section == DeckSection::Extra && card.is_resolved())
    }

    /// Typed names that failed to resolve, in first-seen order.
    #[must_use]
    pub fn unknown_names(&self) -> Vec<String> {
        self.deck
            .distinct_names()
            .into_iter()
            .filter(|name| !self.cards.get(name.as_str()).is_some_and(ProfiledCard::is_resolved))
            .collect()
    }

    /// Family key -> copies across both sections. Always has all four keys.
    #[must_use]
    pub fn card_types(&self) -> BTreeMap<String, u32> {
        let mut types: BTreeMap<String, u32> = [CardFamily::Monster, CardFamily::Spell, CardFamily::Trap, CardFamily::Unknown]
            .iter()
            .map(|f| (f.key().to_string(), 0))
            .collect();
        for (_, _, card) in self.entries() {
            *types.entry(card.class.family().key().to_string()).or_default() += 1;
        }
        types
    }

    /// Archetype -> copies across both sections; untagged cards omitted.
    #[must_use]
    pub fn archetypes(&self) -> BTreeMap<String, u32> {
        let mut archetypes = BTreeMap::new();
        for (_, _, card) in self.entries() {
            if let Some(tag) = &card.class.archetype {
                *archetypes.entry(tag.clone()).or_default() += 1;
            }
        }
        archetypes
    }

    /// Purpose key -> copies; purposes with no copies omitted.
    #[must_use]
    pub fn card_purposes(&self) -> BTreeMap<String, u32> {
        CardPurpose::ALL
            .iter()
            .map(|p| (p.key().to_string(), self.purpose_count(*p)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }

    /// Resolved card names present, in deck order.
    pub fn resolved_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries()
            .filter_map(|(_, _, card)| card.record.map(|r| r.name.as_str()))
    }
}

/// Detailed composition breakdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionSummary {
    /// Main Deck family key -> copies.
    pub main: BTreeMap<String, u32>,
    /// Extra Deck kind (fusion, synchro, xyz, link, other) -> copies.
    pub extra: BTreeMap<String, u32>,
    /// Category slug -> copies across both sections.
    pub categories: BTreeMap<String, u32>,
    pub spell_kinds: BTreeMap<String, u32>,
    pub trap_kinds: BTreeMap<String, u32>,
    /// Archetype -> copies across both sections.
    pub archetypes: BTreeMap<String, u32>,
}

impl CompositionSummary {
    #[must_use]
    pub fn from_profile(profile: &DeckProfile<'_>) -> Self {
        let mut summary = Self {
            archetypes: profile.archetypes(),
            ..Self::default()
        };

        for (section, _, card) in profile.entries() {
            match section {
                DeckSection::Main => {
                    *summary.main.entry(card.class.family().key().to_string()).or_default() += 1;
                }
                DeckSection::Extra => {
                    let kind = card
                        .record
                        .map_or(ExtraDeckKind::Other, |r| ExtraDeckKind::from_type(&r.card_type));
                    *summary.extra.entry(kind.key().to_string()).or_default() += 1;
                }
            }

            *summary.categories.entry(card.class.category.slug().to_string()).or_default() += 1;

            if let Some(record) = card.record {
                if let Some(kind) = SpellKind::of(record) {
                    *summary.spell_kinds.entry(kind.key().to_string()).or_default() += 1;
                }
                if let Some(kind) = TrapKind::of(record) {
                    *summary.trap_kinds.entry(kind.key().to_string()).or_default() += 1;
                }
            }
        }

        summary
    }

    /// Copies in one category.
    #[must_use]
    pub fn category(&self, category: CardCategory) -> u32 {
        self.categories.get(category.slug()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> ResolvedCards {
        ResolvedCards::from_records([
            CardRecord::new("Dark Magician", "Normal Monster"),
            CardRecord::new("Dark Magical Circle", "Spell Card").with_race("Continuous"),
            CardRecord::new("Solemn Strike", "Trap Card").with_race("Counter"),
            CardRecord::new("Stardust Dragon", "Synchro Monster"),
        ])
    }

    #[test]
    fn test_card_types_and_unknown() {
        let deck = DeckList::parse("Dark Magician\nDark Magician\nDark Magical Circle\nMystery\n# Extra Deck\nStardust Dragon");
        let resolved = resolved();
        let profile = DeckProfile::build(&deck, &resolved, &Classifier::new());

        let types = profile.card_types();
        assert_eq!(types["monsters"], 3);
        assert_eq!(types["spells"], 1);
        assert_eq!(types["traps"], 0);
        assert_eq!(types["unknown"], 1);
        assert_eq!(types.values().sum::<u32>() as usize, deck.len());
        assert_eq!(profile.unknown_names(), vec!["Mystery"]);
    }

    #[test]
    fn test_summary_breakdown() {
        let deck = DeckList::parse("Dark Magician\nDark Magical Circle\nSolemn Strike\n# extra deck\nStardust Dragon\nNope");
        let resolved = resolved();
        let profile = DeckProfile::build(&deck, &resolved, &Classifier::new());
        let summary = CompositionSummary::from_profile(&profile);

        assert_eq!(summary.main["monsters"], 1);
        assert_eq!(summary.extra["synchro"], 1);
        assert_eq!(summary.extra["other"], 1);
        assert_eq!(summary.spell_kinds["continuous"], 1);
        assert_eq!(summary.trap_kinds["counter"], 1);
        assert_eq!(summary.category(CardCategory::SynchroMonster), 1);
        assert_eq!(summary.category(CardCategory::Unknown), 1);
        assert_eq!(summary.archetypes["Dark Magician"], 1);
    }

    #[test]
    fn test_limit_violations() {
        let deck = DeckList::parse(
            "Pot of Greed\nPot of Greed\nPot of Greed\nDark Magician\nDark Magician\nDark Magician\nDark Magicain\nGhost\nGhost\nGhost\nGhost\nSolemn Strike",
        );
        let mut records = vec![
            CardRecord::new("Pot of Greed", "Spell Card").with_ban_tcg("Forbidden"),
            CardRecord::new("Solemn Strike", "Trap Card").with_ban_tcg("Limited"),
        ];
        let magician = CardRecord::new("Dark Magician", "Normal Monster");
        records.push(magician.clone());
        let mut resolved = ResolvedCards::from_records(records);
        resolved.insert("Dark Magicain", Ok(magician));

        let profile = DeckProfile::build(&deck, &resolved, &Classifier::new());
        let violations = profile.limit_violations(3);

        let summary: Vec<_> = violations.iter().map(|v| (v.name.as_str(), v.copies, v.allowed)).collect();
        assert_eq!(summary, vec![("Pot of Greed", 3, 0), ("Dark Magician", 4, 3), ("Ghost", 4, 3)]);
        assert_eq!(violations[0].status, LimitStatus::Forbidden);
    }

    #[test]
    fn test_restricted_cards() {
        let deck = DeckList::parse("Pot of Greed\nSolemn Strike\nDark Magician");
        let resolved = ResolvedCards::from_records([
            CardRecord::new("Pot of Greed", "Spell Card").with_ban_tcg("Banned"),
            CardRecord::new("Solemn Strike", "Trap Card").with_ban_tcg("Limited"),
            CardRecord::new("Dark Magician", "Normal Monster"),
        ]);
        let profile = DeckProfile::build(&deck, &resolved, &Classifier::new());
        let restricted = profile.restricted_cards();

        assert_eq!(restricted.len(), 2);
        assert_eq!(restricted[&LimitStatus::Forbidden], vec!["Pot of Greed"]);
        assert_eq!(restricted[&LimitStatus::Limited], vec!["Solemn Strike"]);
    }

    #[test]
    fn test_playsets_and_extra() {
        let deck = DeckList::parse("Dark Magician\nDark Magician\nDark Magician\nGhost\nGhost\nGhost\n# Extra Deck\nStardust Dragon\nUnknown Link");
        let resolved = resolved();
        let profile = DeckProfile::build(&deck, &resolved, &Classifier::new());
        assert_eq!(profile.playsets(3), 1);
        assert_eq!(profile.resolved_extra(), 1);
    }
}
