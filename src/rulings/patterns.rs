//! Effect patterns recognized in card text.

use once_cell::sync::Lazy;
use regex::Regex;

/// A recognizable shape of card effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EffectPattern {
    OncePerTurn,
    HardOncePerTurn,
    Targeting,
    Destruction,
    Negation,
    Removal,
    SpecialSummon,
    Search,
    Cost,
    Trigger,
    Continuous,
    SummoningCondition,
    QuickEffect,
    Ignition,
}

static PATTERNS: Lazy<Vec<(EffectPattern, Regex)>> = Lazy::new(|| {
    [
        (EffectPattern::OncePerTurn, r"(?i)once per turn"),
        (
            EffectPattern::HardOncePerTurn,
            r"(?i)you can only (use|activate) (this effect|each effect) of .+ once per turn",
        ),
        (EffectPattern::Targeting, r"(?i)target"),
        (EffectPattern::Destruction, r"(?i)destroy"),
        (EffectPattern::Negation, r"(?i)negate"),
        (EffectPattern::Removal, r"(?i)(banish|remove from play|return .* to the (hand|deck))"),
        (EffectPattern::SpecialSummon, r"(?i)special summon"),
        (EffectPattern::Search, r"(?i)(add|search).+from your deck"),
        (EffectPattern::Cost, r"(?i)(discard|pay|send|tribute|banish)[^;.]*;"),
        (EffectPattern::Trigger, r"(?i)(when|if) (this card|a card|a monster)"),
        (EffectPattern::Continuous, r"(?i)(while|as long as)"),
        (EffectPattern::SummoningCondition, r"(?i)cannot be normal summoned/set"),
        (
            EffectPattern::QuickEffect,
            r"(?i)(quick effect|during (your opponent's|either player's) (turn|main phase|battle phase))",
        ),
        (EffectPattern::Ignition, r"(?i)(during your main phase|:) you can"),
    ]
    .into_iter()
    .filter_map(|(pattern, source)| Regex::new(source).ok().map(|re| (pattern, re)))
    .collect()
});

/// Set of patterns found in one card text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectProfile {
    found: Vec<EffectPattern>,
}

impl EffectProfile {
    /// Scan card text for every known pattern.
    #[must_use]
    pub fn scan(text: &str) -> Self {
        Self {
            found: PATTERNS
                .iter()
                .filter(|(_, re)| re.is_match(text))
                .map(|(pattern, _)| *pattern)
                .collect(),
        }
    }

    #[must_use]
    pub fn has(&self, pattern: EffectPattern) -> bool {
        self.found.contains(&pattern)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(PATTERNS.len(), 14);
    }

    #[test]
    fn test_scan_ash_blossom() {
        let text = "When a card or effect is activated that includes any of these effects (Quick Effect): You can discard this card; negate that effect. You can only use this effect of \"Ash Blossom & Joyous Spring\" once per turn.";
        let profile = EffectProfile::scan(text);
        assert!(profile.has(EffectPattern::QuickEffect));
        assert!(profile.has(EffectPattern::Cost));
        assert!(profile.has(EffectPattern::Negation));
        assert!(profile.has(EffectPattern::HardOncePerTurn));
        assert!(!profile.has(EffectPattern::Search));
    }

    #[test]
    fn test_scan_removal() {
        assert!(EffectProfile::scan("Target 1 card on the field; banish it.").has(EffectPattern::Removal));
        assert!(EffectProfile::scan("Return all Spells and Traps on the field to the hand.")
            .has(EffectPattern::Removal));
        assert!(!EffectProfile::scan("Destroy all monsters on the field.").has(EffectPattern::Removal));
    }

    #[test]
    fn test_scan_vanilla() {
        let profile = EffectProfile::scan("The ultimate wizard in terms of attack and defense.");
        assert!(profile.is_empty());
    }
}
