//! The analysis report returned for one decklist.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::composition::{CompositionSummary, LimitViolation};

/// Result of analyzing one decklist. Produced once and never mutated.
///
/// Every mapping is a `BTreeMap`, so two equal reports serialize to the
/// same bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Main plus Extra Deck entries.
    pub deck_size: usize,
    pub main_deck_size: usize,
    pub extra_deck_size: usize,

    pub overall_score: u32,
    pub consistency_score: u32,
    pub power_score: u32,
    pub resilience_score: u32,

    /// Family (`monsters`, `spells`, `traps`, `unknown`) -> copies. Sums to
    /// `deck_size`.
    pub card_types: BTreeMap<String, u32>,
    /// Archetype -> copies; untagged cards are not counted.
    pub archetypes: BTreeMap<String, u32>,
    /// Archetype with the most copies, ties broken by name.
    pub main_archetype: Option<String>,
    /// Purpose -> copies.
    pub card_purposes: BTreeMap<String, u32>,
    /// Engine -> member cards present.
    pub engines: BTreeMap<String, Vec<String>>,
    pub composition: CompositionSummary,

    /// Typed name -> canonical name for lookups that corrected the spelling.
    pub name_corrections: BTreeMap<String, String>,
    /// Typed names that did not resolve, in first-seen order.
    pub unknown_cards: Vec<String>,
    /// Cards run at more copies than the Forbidden & Limited list allows.
    pub limit_violations: Vec<LimitViolation>,

    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub meta_comparison: BTreeMap<String, String>,
}

impl AnalysisReport {
    /// All four scores, overall first.
    #[must_use]
    pub fn scores(&self) -> [u32; 4] {
        [
            self.overall_score,
            self.consistency_score,
            self.power_score,
            self.resilience_score,
        ]
    }

    #[must_use]
    pub fn card_type_count(&self, family: &str) -> u32 {
        self.card_types.get(family).copied().unwrap_or(0)
    }
}

/// Tag with the highest count; ties go to the alphabetically first tag.
#[must_use]
pub fn main_archetype(archetypes: &BTreeMap<String, u32>) -> Option<(&str, u32)> {
    archetypes
        .iter()
        .fold(None, |best: Option<(&str, u32)>, (tag, &count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((tag.as_str(), count)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_archetype_tie_break() {
        let mut archetypes = BTreeMap::new();
        assert_eq!(main_archetype(&archetypes), None);

        archetypes.insert("Tenyi".to_string(), 3);
        archetypes.insert("Swordsoul".to_string(), 3);
        archetypes.insert("Branded".to_string(), 1);
        assert_eq!(main_archetype(&archetypes), Some(("Swordsoul", 3)));

        archetypes.insert("Tenyi".to_string(), 4);
        assert_eq!(main_archetype(&archetypes), Some(("Tenyi", 4)));
    }

    #[test]
    fn test_serializes_all_fields() {
        let report = AnalysisReport::default();
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "overall_score",
            "consistency_score",
            "power_score",
            "resilience_score",
            "card_types",
            "archetypes",
            "strengths",
            "weaknesses",
            "recommendations",
            "meta_comparison",
            "name_corrections",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(report.scores(), [0; 4]);
    }
}
