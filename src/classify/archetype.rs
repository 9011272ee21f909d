//! Archetype tagging by card name.
//!
//! Each card maps to zero or one archetype. The tagger checks the card
//! name against an ordered list of archetype names (case-insensitive
//! substring, first match wins) and falls back to the provider-supplied
//! `archetype` field.

use crate::cards::CardRecord;

/// Archetypes recognized out of the box, in match order.
pub const DEFAULT_ARCHETYPES: &[&str] = &[
    "Snake-Eye",
    "Crystal Beast",
    "Fiendsmith",
    "World Legacy",
    "World Chalice",
    "Allure Queen",
    "Vaylantz",
    "Blue-Eyes",
    "Dark Magician",
    "Red-Eyes",
    "Elemental HERO",
    "Destiny HERO",
    "Odd-Eyes",
    "Stardust",
    "Synchron",
    "Cyber Dragon",
    "Galaxy-Eyes",
    "Utopia",
    "Rokket",
    "Dragonmaid",
    "Sky Striker",
    "Altergeist",
    "Salamangreat",
    "Thunder Dragon",
    "Madolche",
    "Shaddoll",
    "Lightsworn",
    "Burning Abyss",
    "Invoked",
    "Danger!",
    "True Draco",
    "Crystron",
    "Orcust",
    "Kaiju",
    "Trickstar",
    "Gouki",
    "Mekk-Knight",
    "Crusadia",
    "Phantom Knight",
    "Predaplant",
    "Subterror",
    "Witchcrafter",
    "Virtual World",
    "Dogmatika",
    "Tri-Brigade",
    "Drytron",
    "Branded",
    "Tearlaments",
    "Spright",
    "Swordsoul",
    "Tenyi",
    "Dracoslayer",
    "Ghostrick",
    "Infernoid",
    "Marincess",
    "Megalith",
    "Myutant",
    "Plunder Patroll",
    "Prank-Kids",
    "Time Thief",
    "Spellbook",
    "Speedroid",
    "Windwitch",
    "Zoodiac",
    "Ancient Gear",
    "Abyss Actor",
    "Adamancipator",
    "Buster Blader",
    "Darklord",
    "Endymion",
    "Fluffal",
    "Fur Hire",
    "Gladiator Beast",
    "Ice Barrier",
    "Infernoble Knight",
    "Infernity",
    "Lunalight",
    "Lyrilusc",
    "Magical Musket",
    "Meklord",
    "Metaphys",
    "Nekroz",
    "Noble Knight",
    "Performapal",
    "Raidraptor",
    "Shiranui",
    "Six Samurai",
    "Superheavy Samurai",
    "Traptrix",
    "Vendread",
    "X-Saber",
    "Yang Zing",
    "Yosenju",
    "Zefra",
];

/// Name-based archetype tagger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchetypeTagger {
    /// Archetype names in match order.
    archetypes: Vec<String>,
    /// Lower-cased copies of `archetypes`.
    lowered: Vec<String>,
    /// Use the record's `archetype` field when no name matches.
    use_provider_tag: bool,
}

impl Default for ArchetypeTagger {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHETYPES.iter().copied())
    }
}

impl ArchetypeTagger {
    /// Tagger over a custom archetype list.
    pub fn new<I, S>(archetypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let archetypes: Vec<String> = archetypes.into_iter().map(Into::into).collect();
        let lowered = archetypes.iter().map(|a| a.to_lowercase()).collect();
        Self {
            archetypes,
            lowered,
            use_provider_tag: true,
        }
    }

    /// Enable or disable the provider-field fallback.
    #[must_use]
    pub fn with_provider_tag(mut self, enabled: bool) -> Self {
        self.use_provider_tag = enabled;
        self
    }

    /// Append archetypes, matched after the existing ones.
    pub fn extend<I, S>(&mut self, archetypes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for archetype in archetypes {
            let archetype = archetype.into();
            self.lowered.push(archetype.to_lowercase());
            self.archetypes.push(archetype);
        }
    }

    /// Archetype for a card name alone.
    #[must_use]
    pub fn tag_name(&self, name: &str) -> Option<&str> {
        let lower = name.to_lowercase();
        self.lowered
            .iter()
            .position(|needle| lower.contains(needle.as_str()))
            .map(|idx| self.archetypes[idx].as_str())
    }

    /// Archetype for a resolved card.
    #[must_use]
    pub fn tag(&self, card: &CardRecord) -> Option<String> {
        if let Some(tag) = self.tag_name(&card.name) {
            return Some(tag.to_string());
        }
        if self.use_provider_tag {
            return card
                .archetype
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string);
        }
        None
    }

    #[must_use]
    pub fn archetypes(&self) -> &[String] {
        &self.archetypes
    }
}
