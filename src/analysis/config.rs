//! Analyzer configuration: score targets, weights and feedback thresholds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::MAX_COPIES;
use crate::config::ConfigError;

/// One scored sub-metric: a count that saturates at `target` and is worth
/// at most `weight` points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricTarget {
    pub target: u32,
    pub weight: f64,
}

impl MetricTarget {
    #[must_use]
    pub const fn new(target: u32, weight: f64) -> Self {
        Self { target, weight }
    }

    /// Points earned by `count`. Non-decreasing in `count`; zero when the
    /// target is zero.
    #[must_use]
    pub fn points(&self, count: u32) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        f64::from(count.min(self.target)) / f64::from(self.target) * self.weight
    }
}

/// Configuration for `DeckAnalyzer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Copies of cards that search the Deck.
    pub searchers: MetricTarget,
    /// Copies of draw cards.
    pub draw: MetricTarget,
    /// Distinct Main Deck cards run at `playset_copies` or more.
    pub playsets: MetricTarget,

    /// Resolved Extra Deck cards.
    pub extra_deck: MetricTarget,
    /// Copies of meta staples.
    pub staples: MetricTarget,
    /// Copies of board breakers.
    pub board_breakers: MetricTarget,

    /// Copies of hand traps.
    pub handtraps: MetricTarget,
    /// Copies of cards that negate.
    pub negates: MetricTarget,
    /// Copies of trap cards.
    pub traps: MetricTarget,

    /// Overall blend: consistency, power, resilience.
    pub overall_weights: [f64; 3],

    /// Copies that make a playset.
    pub playset_copies: u32,

    pub min_main_deck: usize,
    pub max_main_deck: usize,
    pub max_extra_deck: usize,
    /// Copies allowed of any card not on the Forbidden & Limited list.
    pub max_copies: u32,

    /// Scores at or above this are reported as strengths.
    pub strong_score: u32,
    /// Scores below this are reported as weaknesses.
    pub weak_score: u32,
    /// Fewer hand traps than this is a weakness.
    pub min_handtraps: u32,
    /// At least this many hand traps is a strength.
    pub solid_handtraps: u32,
    /// Fewer interaction cards (hand traps, negates, traps, board breakers)
    /// than this is a weakness.
    pub min_interaction: u32,
    /// Fewer searchers plus draw cards than this is a weakness.
    pub min_card_advantage: u32,
    /// A main archetype with at least this many copies is a strength.
    pub focused_archetype: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            searchers: MetricTarget::new(8, 40.0),
            draw: MetricTarget::new(3, 20.0),
            playsets: MetricTarget::new(8, 40.0),
            extra_deck: MetricTarget::new(15, 35.0),
            staples: MetricTarget::new(6, 35.0),
            board_breakers: MetricTarget::new(3, 30.0),
            handtraps: MetricTarget::new(9, 45.0),
            negates: MetricTarget::new(6, 30.0),
            traps: MetricTarget::new(8, 25.0),
            overall_weights: [0.35, 0.35, 0.30],
            playset_copies: 3,
            min_main_deck: 40,
            max_main_deck: 60,
            max_extra_deck: 15,
            max_copies: MAX_COPIES,
            strong_score: 70,
            weak_score: 40,
            min_handtraps: 2,
            solid_handtraps: 6,
            min_interaction: 3,
            min_card_advantage: 4,
            focused_archetype: 12,
        }
    }
}

impl AnalyzerConfig {
    #[must_use]
    pub fn with_overall_weights(mut self, consistency: f64, power: f64, resilience: f64) -> Self {
        self.overall_weights = [consistency, power, resilience];
        self
    }

    #[must_use]
    pub fn with_playset_copies(mut self, copies: u32) -> Self {
        self.playset_copies = copies;
        self
    }

    #[must_use]
    pub fn with_deck_limits(mut self, min_main: usize, max_main: usize, max_extra: usize) -> Self {
        self.min_main_deck = min_main;
        self.max_main_deck = max_main;
        self.max_extra_deck = max_extra;
        self
    }

    #[must_use]
    pub fn with_score_thresholds(mut self, strong: u32, weak: u32) -> Self {
        self.strong_score = strong;
        self.weak_score = weak;
        self
    }

    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        crate::config::load_json(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_saturate() {
        let metric = MetricTarget::new(4, 40.0);
        assert_eq!(metric.points(0), 0.0);
        assert_eq!(metric.points(2), 20.0);
        assert_eq!(metric.points(4), 40.0);
        assert_eq!(metric.points(100), 40.0);
    }

    #[test]
    fn test_zero_target_scores_nothing() {
        assert_eq!(MetricTarget::new(0, 50.0).points(10), 0.0);
    }

    #[test]
    fn test_default_weights_sum_to_hundred() {
        let config = AnalyzerConfig::default();
        let consistency = config.searchers.weight + config.draw.weight + config.playsets.weight;
        let power = config.extra_deck.weight + config.staples.weight + config.board_breakers.weight;
        let resilience = config.handtraps.weight + config.negates.weight + config.traps.weight;
        assert_eq!(consistency, 100.0);
        assert_eq!(power, 100.0);
        assert_eq!(resilience, 100.0);
        assert!((config.overall_weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"playset_copies": 2, "handtraps": {"target": 6, "weight": 45.0}}"#).unwrap();
        assert_eq!(config.playset_copies, 2);
        assert_eq!(config.handtraps.target, 6);
        assert_eq!(config.min_main_deck, 40);
        assert_eq!(config.max_copies, 3);
    }

    #[test]
    fn test_builders() {
        let config = AnalyzerConfig::default()
            .with_overall_weights(0.5, 0.25, 0.25)
            .with_deck_limits(20, 30, 5)
            .with_score_thresholds(80, 30);
        assert_eq!(config.overall_weights, [0.5, 0.25, 0.25]);
        assert_eq!(config.max_extra_deck, 5);
        assert_eq!(config.strong_score, 80);
    }
}
