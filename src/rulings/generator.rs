//! Pattern- and property-based ruling notes for a card.
//!
//! Generated notes are guidance derived from the card text, not official
//! rulings. Records that carry provider rulings should show those instead
//! (see `RulingGenerator::rulings_for`).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::CardRecord;
use crate::classify::{ArchetypeTagger, CardCategory, ExtraDeckKind, SpellKind, TrapKind};
use crate::config::ConfigError;

use super::patterns::{EffectPattern, EffectProfile};

/// Note returned for a card without text.
pub const NO_TEXT_RULING: &str = "Always verify card rulings with the official rulebook or a tournament judge.";

/// Generated notes below this count are padded with generic notes.
pub const MIN_GENERATED_RULINGS: usize = 3;

/// Extra ruling data, merged onto the generated notes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulingsData {
    /// Card name -> notes appended for that card.
    pub card_specific_rules: BTreeMap<String, Vec<String>>,
    /// Archetype -> notes; `{card_name}` is replaced with the card name.
    pub archetype_rules: BTreeMap<String, Vec<String>>,
}

impl RulingsData {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        crate::config::load_json(path.as_ref())
    }
}

/// Generates ruling notes from card text and properties.
#[derive(Clone, Debug, Default)]
pub struct RulingGenerator {
    data: RulingsData,
    archetypes: ArchetypeTagger,
}

impl RulingGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data(mut self, data: RulingsData) -> Self {
        self.data = data;
        self
    }

    /// The record's own rulings when it has any, generated notes otherwise.
    #[must_use]
    pub fn rulings_for(&self, card: &CardRecord) -> Vec<String> {
        if card.rulings.is_empty() {
            self.generate(card)
        } else {
            card.rulings.clone()
        }
    }

    /// Generate notes for a card.
    #[must_use]
    pub fn generate(&self, card: &CardRecord) -> Vec<String> {
        if card.description.trim().is_empty() {
            return vec![NO_TEXT_RULING.to_string()];
        }

        let name = card.name.as_str();
        let effects = EffectProfile::scan(&card.description);
        let mut rulings = Vec::new();

        pattern_rulings(name, &card.description, &effects, &mut rulings);
        property_rulings(card, &mut rulings);
        timing_rulings(card, &mut rulings);

        if let Some(archetype) = self.archetypes.tag(card) {
            match self.data.archetype_rules.get(&archetype) {
                Some(rules) => rulings.extend(rules.iter().map(|r| r.replace("{card_name}", name))),
                None => rulings.push(format!(
                    "This card supports the \"{archetype}\" archetype and works well with other \"{archetype}\" cards."
                )),
            }
        }

        if let Some(specific) = self.data.card_specific_rules.get(name) {
            rulings.extend(specific.iter().cloned());
        }

        if rulings.len() < MIN_GENERATED_RULINGS {
            rulings.push(format!(
                "Always verify the timing and activation conditions of {name} with the current official rulebook."
            ));
            rulings.push(format!(
                "For tournament play, consult with a judge for specific interactions involving {name}."
            ));
        }

        rulings
    }
}

fn pattern_rulings(name: &str, text: &str, effects: &EffectProfile, out: &mut Vec<String>) {
    let lower = text.to_lowercase();

    if effects.has(EffectPattern::OncePerTurn) {
        if effects.has(EffectPattern::HardOncePerTurn) {
            out.push(format!(
                "The \"you can only use this effect of {name} once per turn\" restriction still applies if the card leaves the field and returns, or if you control multiple copies."
            ));
        } else {
            out.push(format!(
                "The \"once per turn\" effects of {name} reset if the card leaves the field and returns, and each copy can use its own effect."
            ));
        }
    }
    if effects.has(EffectPattern::Targeting) {
        out.push(format!(
            "Cards that \"cannot be targeted by card effects\" cannot be chosen as targets for {name}."
        ));
        if lower.contains("spell") || lower.contains("trap") {
            out.push(format!(
                "If a target is no longer in the specified location when {name}'s effect resolves, that part of the effect does not apply."
            ));
        }
    }
    if effects.has(EffectPattern::Destruction) {
        out.push(format!(
            "Cards that \"cannot be destroyed by card effects\" are not destroyed by {name}."
        ));
    }
    if effects.has(EffectPattern::Negation) {
        out.push(format!(
            "Unless stated otherwise, {name} negates the effect and not the activation; the negated card still counts as activated."
        ));
    }
    if effects.has(EffectPattern::Removal) {
        let how = if lower.contains("banish") || lower.contains("remove from play") {
            "banishes"
        } else {
            "returns"
        };
        out.push(format!(
            "{name} {how} cards without destroying them, so \"cannot be destroyed\" protection does not stop it."
        ));
    }
    if effects.has(EffectPattern::QuickEffect) {
        out.push(format!(
            "{name} can be activated during either player's turn at Spell Speed 2, so it can chain to anything except Counter Traps."
        ));
    }
    if effects.has(EffectPattern::SummoningCondition) {
        out.push(format!(
            "{name} must first be Special Summoned by its own procedure before other effects can revive it."
        ));
    }
    if effects.has(EffectPattern::Cost) {
        out.push(format!(
            "Everything before the semicolon in {name}'s text is a cost, paid on activation even if the effect is negated."
        ));
    }
    if effects.has(EffectPattern::Trigger) && !effects.has(EffectPattern::QuickEffect) {
        out.push(format!(
            "The trigger effect of {name} is activated in the first Chain after its condition is met."
        ));
    }
    if effects.has(EffectPattern::Continuous) {
        out.push(format!(
            "The continuous effect of {name} applies while the card remains face-up on the field."
        ));
    }
    if effects.has(EffectPattern::Ignition) {
        out.push(format!(
            "The ignition effect of {name} can only be activated in your Main Phase while the Chain is empty."
        ));
    }
    if effects.has(EffectPattern::Search) {
        out.push(format!(
            "A card added from the Deck by {name} is revealed to the opponent to confirm it meets the conditions."
        ));
    }
    if effects.has(EffectPattern::SpecialSummon) {
        out.push(format!(
            "Monsters Special Summoned by {name}'s effect are properly summoned and can later be revived from the GY."
        ));
    }
}

fn property_rulings(card: &CardRecord, out: &mut Vec<String>) {
    let name = card.name.as_str();
    let lower = card.type_lower();
    let category = CardCategory::of(card);

    if category.is_monster() {
        if lower.contains("effect") {
            out.push(format!(
                "As an Effect Monster, {name}'s effects can be negated by cards like \"Effect Veiler\" or \"Infinite Impermanence\"."
            ));
        }
        match ExtraDeckKind::from_type(&card.card_type) {
            ExtraDeckKind::Fusion => out.push(format!(
                "{name} must first be Fusion Summoned with the correct materials before it can be revived."
            )),
            ExtraDeckKind::Synchro => {
                let level = card.level.map_or_else(|| "its Level".to_string(), |l| l.to_string());
                out.push(format!(
                    "{name} is Synchro Summoned with a Tuner and non-Tuners whose Levels total exactly {level}."
                ));
            }
            ExtraDeckKind::Xyz => out.push(format!(
                "Materials attached to {name} are not on the field; they go to the GY when {name} leaves the field."
            )),
            ExtraDeckKind::Link => out.push(format!(
                "The Link Arrows on {name} determine which zones it points to."
            )),
            ExtraDeckKind::Other => {}
        }
        if lower.contains("pendulum") {
            out.push(format!(
                "If {name} is destroyed in a Monster Zone, it is placed face-up in the Extra Deck instead of going to the GY."
            ));
        }
    } else if let Some(kind) = SpellKind::of(card) {
        match kind {
            SpellKind::QuickPlay => out.push(
                "A Quick-Play Spell can be activated from the hand during your turn, or on either turn once it has been Set for a turn.".to_string(),
            ),
            SpellKind::Continuous => out.push(
                "A Continuous Spell stays on the field; its effects stop applying once it leaves the field.".to_string(),
            ),
            SpellKind::Ritual => out.push(
                "The Levels of the monsters Tributed for this Ritual Spell must equal or exceed the Ritual Monster's Level.".to_string(),
            ),
            _ => {}
        }
    } else if let Some(kind) = TrapKind::of(card) {
        out.push("A Trap Card must be Set for one turn before it can be activated.".to_string());
        match kind {
            TrapKind::Counter => out.push(
                "A Counter Trap is Spell Speed 3; only another Counter Trap can be chained to it.".to_string(),
            ),
            TrapKind::Continuous => out.push(
                "A Continuous Trap stays on the field; its effects stop applying once it leaves the field.".to_string(),
            ),
            TrapKind::Normal => {}
        }
    }
}

fn timing_rulings(card: &CardRecord, out: &mut Vec<String>) {
    let name = card.name.as_str();
    let lower = card.description.to_lowercase();

    if lower.contains("when") && lower.contains("you can") {
        out.push(format!(
            "The \"When ... you can\" effect of {name} is an optional trigger that can miss the timing if its condition was not the last thing to happen."
        ));
    }
    if lower.contains("during the damage step") {
        out.push(format!("{name} can be activated during the Damage Step."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let card = CardRecord::new("Blank", "Effect Monster");
        assert_eq!(RulingGenerator::new().generate(&card), vec![NO_TEXT_RULING.to_string()]);
    }

    #[test]
    fn test_padding_when_few_rulings() {
        let card = CardRecord::new("Kuriboh Plain", "Normal Monster")
            .with_description("A small fluffy creature.");
        let rulings = RulingGenerator::new().generate(&card);
        assert_eq!(rulings.len(), 2);
        assert!(rulings[0].contains("Kuriboh Plain"));
    }

    #[test]
    fn test_counter_trap() {
        let card = CardRecord::new("Solemn Strike", "Trap Card")
            .with_race("Counter")
            .with_description("When a monster would be Summoned: Pay 1500 LP; negate the Summon, and if you do, destroy that monster.");
        let rulings = RulingGenerator::new().generate(&card);
        assert!(rulings.iter().any(|r| r.contains("Spell Speed 3")));
        assert!(rulings.iter().any(|r| r.contains("cost")));
        assert!(rulings.iter().any(|r| r.contains("negates the effect")));
        assert!(rulings.len() >= MIN_GENERATED_RULINGS);
    }

    #[test]
    fn test_removal_rulings() {
        let generator = RulingGenerator::new();
        let banish = CardRecord::new("Dimensional Barrier Lite", "Trap Card").with_description(
            "Target 1 monster your opponent controls; banish it.",
        );
        assert!(generator
            .generate(&banish)
            .contains(&"Dimensional Barrier Lite banishes cards without destroying them, so \"cannot be destroyed\" protection does not stop it.".to_string()));

        let bounce = CardRecord::new("Compulsory Lite", "Trap Card")
            .with_description("Target 1 face-up monster on the field; return that target to the hand.");
        assert!(generator
            .generate(&bounce)
            .iter()
            .any(|r| r.starts_with("Compulsory Lite returns cards without destroying them")));

        let plain = CardRecord::new("Raigeki Lite", "Spell Card")
            .with_description("Destroy all monsters your opponent controls.");
        assert!(!generator
            .generate(&plain)
            .iter()
            .any(|r| r.contains("without destroying")));
    }

    #[test]
    fn test_provider_rulings_take_precedence() {
        let card = CardRecord::new("Pot of Greed", "Spell Card")
            .with_description("Draw 2 cards.")
            .with_ruling("This card is Forbidden.");
        assert_eq!(RulingGenerator::new().rulings_for(&card), vec!["This card is Forbidden."]);
    }

    #[test]
    fn test_archetype_and_specific_rules() {
        let mut data = RulingsData::default();
        data.archetype_rules.insert(
            "Snake-Eye".to_string(),
            vec!["{card_name} can send itself to the GY for Snake-Eye effects.".to_string()],
        );
        data.card_specific_rules
            .insert("Snake-Eye Ash".to_string(), vec!["Limited to 1 in some formats.".to_string()]);
        let card = CardRecord::new("Snake-Eye Ash", "Effect Monster").with_description(
            "If this card is Normal or Special Summoned: You can add 1 Level 1 FIRE monster from your Deck to your hand.",
        );

        let rulings = RulingGenerator::new().with_data(data).generate(&card);
        assert!(rulings.contains(&"Snake-Eye Ash can send itself to the GY for Snake-Eye effects.".to_string()));
        assert_eq!(rulings.last().map(String::as_str), Some("Limited to 1 in some formats."));
    }
}
