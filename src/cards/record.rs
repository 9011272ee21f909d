//! Card records - canonical card metadata.
//!
//! `CardRecord` holds the immutable properties of a card as returned by a
//! card-metadata provider. For example, "Dark Magician" is a DARK Spellcaster
//! Normal Monster with 2500 ATK - these are part of the record.
//!
//! Field names follow the YGOPRODeck card-info payload (`type`, `desc`, `def`)
//! so records can be deserialized straight from a provider dump.

use serde::{Deserialize, Serialize};

use super::banlist::{BanlistInfo, LimitStatus};

/// Canonical metadata for one card, keyed by `name`.
///
/// ## Example
///
/// ```
/// use ygo_deck::cards::CardRecord;
///
/// let magician = CardRecord::new("Dark Magician", "Normal Monster")
///     .with_attribute("DARK")
///     .with_level(7)
///     .with_stats(2500, 2100);
///
/// assert!(magician.is_monster());
/// assert_eq!(magician.atk, Some(2500));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Provider passcode, doubles as the artwork id.
    #[serde(default)]
    pub id: Option<u64>,

    /// Canonical card name.
    pub name: String,

    /// Free-text category, e.g. "Effect Monster" or "Normal Trap".
    #[serde(rename = "type")]
    pub card_type: String,

    /// Monster attribute (DARK, LIGHT, ...).
    #[serde(default)]
    pub attribute: Option<String>,

    /// Level or Rank.
    #[serde(default)]
    pub level: Option<i32>,

    /// Monster type for monsters, subtype (Quick-Play, Counter, ...) for spells and traps.
    #[serde(default)]
    pub race: Option<String>,

    #[serde(default)]
    pub atk: Option<i32>,

    #[serde(default)]
    pub def: Option<i32>,

    /// Card text.
    #[serde(default, rename = "desc")]
    pub description: String,

    /// Archetype tag supplied by the provider, if any.
    #[serde(default)]
    pub archetype: Option<String>,

    /// Official rulings, in provider order.
    #[serde(default)]
    pub rulings: Vec<String>,

    /// Forbidden & Limited status per format; absent when unlimited everywhere.
    #[serde(default)]
    pub banlist_info: Option<BanlistInfo>,
}

impl CardRecord {
    /// Create a record with a name and type string.
    #[must_use]
    pub fn new(name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            card_type: card_type.into(),
            attribute: None,
            level: None,
            race: None,
            atk: None,
            def: None,
            description: String::new(),
            archetype: None,
            rulings: Vec::new(),
            banlist_info: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    /// Set ATK and DEF together.
    #[must_use]
    pub fn with_stats(mut self, atk: i32, def: i32) -> Self {
        self.atk = Some(atk);
        self.def = Some(def);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    /// Add an official ruling (builder pattern).
    #[must_use]
    pub fn with_ruling(mut self, ruling: impl Into<String>) -> Self {
        self.rulings.push(ruling.into());
        self
    }

    /// Set the TCG Forbidden & Limited status ("Forbidden", "Limited", ...).
    #[must_use]
    pub fn with_ban_tcg(mut self, status: impl Into<String>) -> Self {
        self.banlist_info = Some(BanlistInfo::tcg(status));
        self
    }

    /// Status on the TCG list.
    #[must_use]
    pub fn limit_status(&self) -> LimitStatus {
        LimitStatus::of(self.banlist_info.as_ref())
    }

    /// Lower-cased type string, the input to category dispatch.
    #[must_use]
    pub fn type_lower(&self) -> String {
        self.card_type.to_lowercase()
    }

    /// Lower-cased race/subtype, empty when absent.
    #[must_use]
    pub fn race_lower(&self) -> String {
        self.race.as_deref().unwrap_or_default().to_lowercase()
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.type_lower().contains("monster")
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        !self.is_monster() && self.type_lower().contains("spell")
    }

    #[must_use]
    pub fn is_trap(&self) -> bool {
        let lower = self.type_lower();
        !lower.contains("monster") && !lower.contains("spell") && lower.contains("trap")
    }
}
