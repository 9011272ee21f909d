//! Sub-metrics and the four deck scores.
//!
//! Every sub-metric is an absolute copy count, and every score is a sum of
//! saturating `MetricTarget::points`. Adding a card can only raise counts,
//! so no score ever drops when a card is added.

use serde::{Deserialize, Serialize};

use crate::classify::{CardFamily, CardPurpose};

use super::composition::DeckProfile;
use super::config::AnalyzerConfig;

/// Counts the scores and feedback are computed from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckMetrics {
    pub main_size: usize,
    pub extra_size: usize,
    pub unknown: u32,

    pub searchers: u32,
    pub draw: u32,
    pub playsets: u32,

    pub resolved_extra: u32,
    pub staples: u32,
    pub board_breakers: u32,

    pub handtraps: u32,
    pub negates: u32,
    pub traps: u32,
    pub extenders: u32,
}

impl DeckMetrics {
    #[must_use]
    pub fn measure(profile: &DeckProfile<'_>, config: &AnalyzerConfig, staples: &[String]) -> Self {
        let deck = profile.deck();
        Self {
            main_size: deck.main_deck.len(),
            extra_size: deck.extra_deck.len(),
            unknown: profile.family_count(CardFamily::Unknown),
            searchers: profile.purpose_count(CardPurpose::Searcher),
            draw: profile.purpose_count(CardPurpose::Draw),
            playsets: profile.playsets(config.playset_copies),
            resolved_extra: profile.resolved_extra(),
            staples: profile.named_count(staples),
            board_breakers: profile.purpose_count(CardPurpose::BoardBreaker),
            handtraps: profile.purpose_count(CardPurpose::HandTrap),
            negates: profile.purpose_count(CardPurpose::Negate),
            traps: profile.family_count(CardFamily::Trap),
            extenders: profile.purpose_count(CardPurpose::Extender),
        }
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.main_size + self.extra_size
    }

    /// Cards that interact on the opponent's turn or break their board.
    #[must_use]
    pub fn interaction(&self) -> u32 {
        self.handtraps + self.negates + self.traps + self.board_breakers
    }
}

/// The four 0-100 scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: u32,
    pub consistency: u32,
    pub power: u32,
    pub resilience: u32,
}

fn to_score(points: f64) -> u32 {
    if points.is_nan() {
        return 0;
    }
    // clamped to [0, 100] before the cast
    points.round().clamp(0.0, 100.0) as u32
}

impl Scores {
    #[must_use]
    pub fn compute(metrics: &DeckMetrics, config: &AnalyzerConfig) -> Self {
        let consistency = config.searchers.points(metrics.searchers)
            + config.draw.points(metrics.draw)
            + config.playsets.points(metrics.playsets);
        let power = config.extra_deck.points(metrics.resolved_extra)
            + config.staples.points(metrics.staples)
            + config.board_breakers.points(metrics.board_breakers);
        let resilience = config.handtraps.points(metrics.handtraps)
            + config.negates.points(metrics.negates)
            + config.traps.points(metrics.traps);

        let consistency = to_score(consistency);
        let power = to_score(power);
        let resilience = to_score(resilience);

        let [wc, wp, wr] = config.overall_weights;
        let overall = to_score(
            f64::from(consistency) * wc + f64::from(power) * wp + f64::from(resilience) * wr,
        );

        Self {
            overall,
            consistency,
            power,
            resilience,
        }
    }
}
