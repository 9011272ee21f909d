//! Threshold-triggered strengths, weaknesses and recommendations.
//!
//! Each trigger is independent and evaluated in a fixed order, so the same
//! metrics always produce the same strings in the same order.

use serde::{Deserialize, Serialize};

use super::composition::LimitViolation;
use super::config::AnalyzerConfig;
use super::scoring::{DeckMetrics, Scores};
use crate::cards::LimitStatus;

/// Recommendation given for an empty deck, and nothing else.
pub const TOO_SMALL_TO_ANALYZE: &str = "Deck is too small to analyze: add cards to the Main Deck first";

/// Human-readable feedback for one deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Inputs beyond the metrics that some triggers need.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeedbackContext<'a> {
    pub main_archetype: Option<(&'a str, u32)>,
    pub unknown_names: &'a [String],
    pub violations: &'a [LimitViolation],
}

/// "1 card", "2 cards".
fn count_of(n: impl Into<u64>, noun: &str) -> String {
    let n = n.into();
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

fn copies_of(n: u32) -> String {
    if n == 1 {
        "1 copy".to_string()
    } else {
        format!("{n} copies")
    }
}

impl Feedback {
    #[must_use]
    pub fn evaluate(
        metrics: &DeckMetrics,
        scores: &Scores,
        context: FeedbackContext<'_>,
        config: &AnalyzerConfig,
    ) -> Self {
        if metrics.deck_size() == 0 {
            return Self {
                recommendations: vec![TOO_SMALL_TO_ANALYZE.to_string()],
                ..Self::default()
            };
        }

        let mut feedback = Self::default();
        feedback.strengths(metrics, scores, context, config);
        feedback.weaknesses(metrics, scores, context, config);
        feedback.recommendations(metrics, scores, context, config);
        feedback
    }

    fn strengths(
        &mut self,
        metrics: &DeckMetrics,
        scores: &Scores,
        context: FeedbackContext<'_>,
        config: &AnalyzerConfig,
    ) {
        let strong = config.strong_score;
        if scores.consistency >= strong {
            self.strengths
                .push("High consistency: plenty of searchers, draw and playsets".to_string());
        }
        if scores.power >= strong {
            self.strengths
                .push("Strong power: deep Extra Deck and meta staples".to_string());
        }
        if scores.resilience >= strong {
            self.strengths
                .push("Resilient: good density of hand traps, negates and traps".to_string());
        }
        if metrics.handtraps >= config.solid_handtraps.max(1) {
            self.strengths
                .push(format!("Solid hand trap suite ({} copies)", metrics.handtraps));
        }
        if metrics.board_breakers >= config.board_breakers.target.max(1) {
            self.strengths
                .push(format!("Good going-second options ({} board breakers)", metrics.board_breakers));
        }
        if let Some((archetype, copies)) = context.main_archetype {
            if copies >= config.focused_archetype {
                self.strengths
                    .push(format!("Focused {archetype} core ({copies} cards)"));
            }
        }
    }

    fn weaknesses(
        &mut self,
        metrics: &DeckMetrics,
        scores: &Scores,
        context: FeedbackContext<'_>,
        config: &AnalyzerConfig,
    ) {
        if metrics.main_size < config.min_main_deck {
            self.weaknesses.push(format!(
                "Main Deck has {}; the minimum is {}",
                count_of(metrics.main_size as u64, "card"),
                config.min_main_deck
            ));
        }
        if metrics.main_size > config.max_main_deck {
            self.weaknesses.push(format!(
                "Main Deck has {}; the maximum is {}",
                count_of(metrics.main_size as u64, "card"),
                config.max_main_deck
            ));
        }
        if metrics.extra_size > config.max_extra_deck {
            self.weaknesses.push(format!(
                "Extra Deck has {}; the maximum is {}",
                count_of(metrics.extra_size as u64, "card"),
                config.max_extra_deck
            ));
        }
        for violation in context.violations {
            let weakness = match violation.status {
                LimitStatus::Forbidden => format!(
                    "{} is Forbidden but the deck runs {}",
                    violation.name,
                    copies_of(violation.copies)
                ),
                LimitStatus::Unlimited => format!(
                    "{} is run at {}; the limit is {}",
                    violation.name,
                    copies_of(violation.copies),
                    violation.allowed
                ),
                status => format!(
                    "{} is {} ({} allowed) but the deck runs {}",
                    violation.name,
                    status,
                    violation.allowed,
                    copies_of(violation.copies)
                ),
            };
            self.weaknesses.push(weakness);
        }
        if metrics.interaction() < config.min_interaction {
            self.weaknesses.push(format!(
                "Lack of interaction: only {} cards can disrupt the opponent",
                metrics.interaction()
            ));
        }
        if metrics.handtraps < config.min_handtraps {
            self.weaknesses.push(format!(
                "Few hand traps ({}): vulnerable to the opponent's combos",
                metrics.handtraps
            ));
        }
        if metrics.searchers + metrics.draw < config.min_card_advantage {
            self.weaknesses
                .push("Low consistency: few searchers or draw cards".to_string());
        }
        if metrics.board_breakers == 0 {
            self.weaknesses
                .push("No board breakers for going second".to_string());
        }
        if metrics.extra_size == 0 {
            self.weaknesses
                .push("Empty Extra Deck limits your options".to_string());
        }
        if scores.overall < config.weak_score {
            self.weaknesses
                .push(format!("Low overall score ({})", scores.overall));
        }
    }

    fn recommendations(
        &mut self,
        metrics: &DeckMetrics,
        scores: &Scores,
        context: FeedbackContext<'_>,
        config: &AnalyzerConfig,
    ) {
        if !context.unknown_names.is_empty() {
            self.recommendations.push(format!(
                "Check the spelling of {}: {}",
                count_of(context.unknown_names.len() as u64, "unrecognized card"),
                context.unknown_names.join(", ")
            ));
        }
        if metrics.main_size < config.min_main_deck {
            self.recommendations.push(format!(
                "Add {} more to reach a legal Main Deck",
                count_of((config.min_main_deck - metrics.main_size) as u64, "card")
            ));
        }
        if metrics.main_size > config.max_main_deck {
            self.recommendations.push(format!(
                "Cut {} from the Main Deck",
                count_of((metrics.main_size - config.max_main_deck) as u64, "card")
            ));
        }
        if metrics.extra_size > config.max_extra_deck {
            self.recommendations.push(format!(
                "Cut {} from the Extra Deck",
                count_of((metrics.extra_size - config.max_extra_deck) as u64, "card")
            ));
        }
        for violation in context.violations {
            self.recommendations.push(format!(
                "Cut {} of {}",
                copies_of(violation.copies - violation.allowed),
                violation.name
            ));
        }
        if metrics.handtraps < config.min_handtraps {
            self.recommendations.push(
                "Add hand traps such as Ash Blossom & Joyous Spring, Infinite Impermanence or Effect Veiler"
                    .to_string(),
            );
        }
        if metrics.interaction() < config.min_interaction {
            self.recommendations
                .push("Add negation or trap cards to interact on your opponent's turn".to_string());
        }
        if metrics.searchers + metrics.draw < config.min_card_advantage {
            self.recommendations
                .push("Add searchers or draw spells to find your starters more often".to_string());
        }
        if scores.consistency < config.weak_score && metrics.playsets < config.playsets.target {
            self.recommendations.push(format!(
                "Run your key starters at {} copies",
                config.playset_copies
            ));
        }
        if metrics.board_breakers == 0 {
            self.recommendations.push(
                "Add board breakers such as Lightning Storm, Harpie's Feather Duster or Evenly Matched".to_string(),
            );
        }
        if metrics.extra_size == 0 && metrics.extenders > 0 {
            self.recommendations
                .push("Build an Extra Deck to convert your extenders into boards".to_string());
        }
    }
}
