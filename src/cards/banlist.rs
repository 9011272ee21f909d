//! Forbidden & Limited list status.
//!
//! YGOPRODeck attaches a `banlist_info` object to every card that is not
//! unlimited in some format. Only the TCG list is used for deck legality.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Copies of one card a legal deck may hold when it is not on the list.
pub const MAX_COPIES: u32 = 3;

/// Provider-side banlist fields, as delivered in the card-info payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanlistInfo {
    #[serde(default)]
    pub ban_tcg: Option<String>,
    #[serde(default)]
    pub ban_ocg: Option<String>,
    #[serde(default)]
    pub ban_goat: Option<String>,
}

impl BanlistInfo {
    /// Info with only a TCG status.
    #[must_use]
    pub fn tcg(status: impl Into<String>) -> Self {
        Self {
            ban_tcg: Some(status.into()),
            ..Self::default()
        }
    }
}

/// Limit status of a card on the TCG list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitStatus {
    Forbidden,
    Limited,
    SemiLimited,
    #[default]
    Unlimited,
}

impl LimitStatus {
    /// Statuses that restrict copies, most restrictive first.
    pub const RESTRICTED: [LimitStatus; 3] = [
        LimitStatus::Forbidden,
        LimitStatus::Limited,
        LimitStatus::SemiLimited,
    ];

    /// Parse a provider status. "Banned" and "Forbidden" are the same
    /// thing; anything unrecognized is unlimited.
    #[must_use]
    pub fn from_provider(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "banned" | "forbidden" => LimitStatus::Forbidden,
            "limited" => LimitStatus::Limited,
            "semi-limited" | "semi limited" | "semilimited" => LimitStatus::SemiLimited,
            _ => LimitStatus::Unlimited,
        }
    }

    /// Status on the TCG list, unlimited when the card is not listed.
    #[must_use]
    pub fn of(info: Option<&BanlistInfo>) -> Self {
        info.and_then(|i| i.ban_tcg.as_deref())
            .map_or(LimitStatus::Unlimited, Self::from_provider)
    }

    /// Copies allowed under this status, capped by `max_copies`.
    #[must_use]
    pub fn allowed_copies(self, max_copies: u32) -> u32 {
        let listed = match self {
            LimitStatus::Forbidden => 0,
            LimitStatus::Limited => 1,
            LimitStatus::SemiLimited => 2,
            LimitStatus::Unlimited => max_copies,
        };
        listed.min(max_copies)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LimitStatus::Forbidden => "Forbidden",
            LimitStatus::Limited => "Limited",
            LimitStatus::SemiLimited => "Semi-Limited",
            LimitStatus::Unlimited => "Unlimited",
        }
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
