//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ygo_deck::{CardCatalog, CardRecord};

/// Names no catalog entry is close to.
pub const UNKNOWN_NAMES: &[&str] = &["Zzyzx Qwerty", "Plonk Vorbulator", "Xylo Grumpkin 9000"];

pub fn sample_records() -> Vec<CardRecord> {
    vec![
        CardRecord::new("Dark Magician", "Normal Monster")
            .with_attribute("DARK")
            .with_level(7)
            .with_race("Spellcaster")
            .with_stats(2500, 2100)
            .with_description("The ultimate wizard in terms of attack and defense."),
        CardRecord::new("Blue-Eyes White Dragon", "Normal Monster")
            .with_attribute("LIGHT")
            .with_level(8)
            .with_race("Dragon")
            .with_stats(3000, 2500)
            .with_description("This legendary dragon is a powerful engine of destruction."),
        CardRecord::new("Ash Blossom & Joyous Spring", "Tuner Monster")
            .with_level(3)
            .with_race("Zombie")
            .with_description("When a card or effect is activated that includes any of these effects (Quick Effect): You can discard this card; negate that effect. You can only use this effect of \"Ash Blossom & Joyous Spring\" once per turn."),
        CardRecord::new("Effect Veiler", "Tuner Monster")
            .with_description("During your opponent's Main Phase (Quick Effect): You can send this card from your hand to the GY, then target 1 Effect Monster your opponent controls; negate the effects of that face-up monster your opponent controls, until the end of this turn."),
        CardRecord::new("Snake-Eye Ash", "Effect Monster")
            .with_description("If this card is Normal or Special Summoned: You can add 1 Level 1 FIRE monster from your Deck to your hand."),
        CardRecord::new("Pot of Greed", "Spell Card")
            .with_race("Normal")
            .with_description("Draw 2 cards."),
        CardRecord::new("Called by the Grave", "Spell Card")
            .with_race("Quick-Play")
            .with_description("Target 1 monster in your opponent's GY; banish it, and if you do, until the end of the next turn, its effects are negated."),
        CardRecord::new("Lightning Storm", "Spell Card")
            .with_race("Normal")
            .with_description("If you control no face-up cards: Activate 1 of these effects; Destroy all Attack Position monsters your opponent controls. Destroy all Spells and Traps your opponent controls."),
        CardRecord::new("Solemn Strike", "Trap Card")
            .with_race("Counter")
            .with_description("When a monster would be Summoned, OR a monster effect is activated: Pay 1500 LP; negate the Summon or activation, and if you do, destroy that card."),
        CardRecord::new("Infinite Impermanence", "Trap Card")
            .with_race("Normal")
            .with_description("Target 1 face-up monster your opponent controls; negate its effects until the end of this turn."),
        CardRecord::new("Stardust Dragon", "Synchro Monster")
            .with_level(8)
            .with_description("1 Tuner + 1+ non-Tuner monsters. When a card or effect is activated that would destroy a card(s) on the field (Quick Effect): You can Tribute this card; negate the activation, and if you do, destroy it."),
        CardRecord::new("Accesscode Talker", "Link Monster")
            .with_description("2+ Effect Monsters"),
        CardRecord::new("Harpie's Feather Duster", "Spell Card")
            .with_race("Normal")
            .with_description("Destroy all Spells and Traps your opponent controls."),
    ]
}

pub fn sample_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for record in sample_records() {
        catalog.register(record).expect("unique fixture names");
    }
    catalog
}
