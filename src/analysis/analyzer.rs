//! The deck analyzer: resolved decklist in, `AnalysisReport` out.

use std::sync::Arc;

use crate::classify::{Classifier, EngineDetector};
use crate::deck::DeckList;
use crate::resolver::{resolve_all, CardResolver, ResolveConfig, ResolvedCards};

use super::composition::{CompositionSummary, DeckProfile};
use super::config::AnalyzerConfig;
use super::feedback::{Feedback, FeedbackContext};
use super::meta::MetaProfile;
use super::report::{main_archetype, AnalysisReport};
use super::scoring::{DeckMetrics, Scores};

/// Analyzes decklists. Holds only immutable configuration, so one analyzer
/// can serve concurrent requests.
#[derive(Clone, Debug)]
pub struct DeckAnalyzer {
    config: AnalyzerConfig,
    classifier: Classifier,
    engines: EngineDetector,
    meta: MetaProfile,
}

impl Default for DeckAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            classifier: Classifier::default(),
            engines: EngineDetector::default(),
            meta: MetaProfile::builtin(),
        }
    }
}

impl DeckAnalyzer {
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: MetaProfile) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn with_engines(mut self, engines: EngineDetector) -> Self {
        self.engines = engines;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    #[must_use]
    pub fn meta(&self) -> &MetaProfile {
        &self.meta
    }

    /// Analyze a decklist whose names have already been resolved. Names
    /// missing from `resolved` count as unknown.
    #[must_use]
    pub fn analyze(&self, deck: &DeckList, resolved: &ResolvedCards) -> AnalysisReport {
        let profile = DeckProfile::build(deck, resolved, &self.classifier);

        let metrics = DeckMetrics::measure(&profile, &self.config, &self.meta.staple_cards);
        let scores = Scores::compute(&metrics, &self.config);

        let archetypes = profile.archetypes();
        let top = main_archetype(&archetypes);
        let unknown_cards = profile.unknown_names();
        let limit_violations = profile.limit_violations(self.config.max_copies);

        let feedback = Feedback::evaluate(
            &metrics,
            &scores,
            FeedbackContext {
                main_archetype: top,
                unknown_names: &unknown_cards,
                violations: &limit_violations,
            },
            &self.config,
        );
        let meta_comparison = self.meta.compare(&profile, top.map(|(tag, _)| tag));
        let engines = self.engines.detect(profile.resolved_names());
        let main_archetype = top.map(|(tag, _)| tag.to_string());

        tracing::debug!(
            "Scored deck: overall={} consistency={} power={} resilience={}",
            scores.overall,
            scores.consistency,
            scores.power,
            scores.resilience
        );

        AnalysisReport {
            deck_size: deck.len(),
            main_deck_size: deck.main_deck.len(),
            extra_deck_size: deck.extra_deck.len(),
            overall_score: scores.overall,
            consistency_score: scores.consistency,
            power_score: scores.power,
            resilience_score: scores.resilience,
            card_types: profile.card_types(),
            main_archetype,
            archetypes,
            card_purposes: profile.card_purposes(),
            engines,
            composition: CompositionSummary::from_profile(&profile),
            name_corrections: resolved.corrections(),
            unknown_cards,
            limit_violations,
            strengths: feedback.strengths,
            weaknesses: feedback.weaknesses,
            recommendations: feedback.recommendations,
            meta_comparison,
        }
    }

    /// Resolve every distinct name of `deck`, waiting for all lookups.
    pub async fn resolve<R>(&self, resolver: Arc<R>, deck: &DeckList, config: &ResolveConfig) -> ResolvedCards
    where
        R: CardResolver + ?Sized + 'static,
    {
        let names = deck.distinct_names();
        tracing::info!(
            "Resolving {} distinct cards ({} main, {} extra)",
            names.len(),
            deck.main_deck.len(),
            deck.extra_deck.len()
        );
        resolve_all(resolver, &names, config).await
    }

    /// Resolve then analyze.
    pub async fn analyze_with<R>(&self, resolver: Arc<R>, deck: &DeckList, config: &ResolveConfig) -> AnalysisReport
    where
        R: CardResolver + ?Sized + 'static,
    {
        let resolved = self.resolve(resolver, deck, config).await;
        self.analyze(deck, &resolved)
    }
}
