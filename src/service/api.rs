//! Request/response surface used by presentation layers.
//!
//! Both operations always return a response value. Failures are reported
//! through `success: false` and `error`, never by panicking or returning
//! `Err` to the caller.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisReport, DeckAnalyzer};
use crate::cards::CardRecord;
use crate::deck::DeckList;
use crate::resolver::{resolve_with_timeout, CardResolver, ResolveConfig, ResolveError};
use crate::rulings::RulingGenerator;

use super::error::EngineError;

/// Response of `AnalyzeDeck`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeDeckResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisReport>,
    /// Resolved records keyed by the name as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_data: Option<BTreeMap<String, CardRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck: Option<DeckList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeDeckResponse {
    #[must_use]
    pub fn ok(analysis: AnalysisReport, card_data: BTreeMap<String, CardRecord>, deck: DeckList) -> Self {
        Self {
            success: true,
            analysis: Some(analysis),
            card_data: Some(card_data),
            deck: Some(deck),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(error: &EngineError) -> Self {
        Self {
            success: false,
            analysis: None,
            card_data: None,
            deck: None,
            error: Some(error.to_string()),
        }
    }
}

/// Response of `GetCardDetails`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetailsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rulings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CardDetailsResponse {
    #[must_use]
    pub fn ok(card: CardRecord, rulings: Vec<String>) -> Self {
        Self {
            success: true,
            card: Some(card),
            rulings: Some(rulings),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(error: &EngineError) -> Self {
        Self {
            success: false,
            card: None,
            rulings: None,
            error: Some(error.to_string()),
        }
    }
}

/// The engine's request handler.
pub struct DeckService<R: ?Sized> {
    resolver: Arc<R>,
    analyzer: DeckAnalyzer,
    resolve_config: ResolveConfig,
    rulings: RulingGenerator,
}

impl<R> DeckService<R>
where
    R: CardResolver + ?Sized + 'static,
{
    pub fn new(resolver: Arc<R>) -> Self {
        Self {
            resolver,
            analyzer: DeckAnalyzer::default(),
            resolve_config: ResolveConfig::default(),
            rulings: RulingGenerator::default(),
        }
    }

    #[must_use]
    pub fn with_analyzer(mut self, analyzer: DeckAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    #[must_use]
    pub fn with_resolve_config(mut self, config: ResolveConfig) -> Self {
        self.resolve_config = config;
        self
    }

    #[must_use]
    pub fn with_rulings(mut self, rulings: RulingGenerator) -> Self {
        self.rulings = rulings;
        self
    }

    pub fn resolver(&self) -> &Arc<R> {
        &self.resolver
    }

    /// `AnalyzeDeck`: parse, resolve, analyze.
    pub async fn analyze_deck(&self, text: &str) -> AnalyzeDeckResponse {
        match self.try_analyze_deck(text).await {
            Ok((report, card_data, deck)) => AnalyzeDeckResponse::ok(report, card_data, deck),
            Err(e) => {
                tracing::warn!("Deck analysis failed: {}", e);
                AnalyzeDeckResponse::failure(&e)
            }
        }
    }

    async fn try_analyze_deck(
        &self,
        text: &str,
    ) -> Result<(AnalysisReport, BTreeMap<String, CardRecord>, DeckList), EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::invalid_request("decklist is empty"));
        }

        // comment-only text is a valid, empty deck
        let deck = DeckList::parse(text);

        let resolved = self
            .analyzer
            .resolve(Arc::clone(&self.resolver), &deck, &self.resolve_config)
            .await;
        if resolved.upstream_unavailable() {
            return Err(EngineError::upstream_unavailable(format!(
                "all {} card lookups failed",
                resolved.requested()
            )));
        }

        let report = self.analyzer.analyze(&deck, &resolved);
        tracing::info!(
            "Analyzed deck: {} cards, {} unknown, overall score {}",
            report.deck_size,
            report.unknown_cards.len(),
            report.overall_score
        );
        Ok((report, resolved.card_data(), deck))
    }

    /// `GetCardDetails`: one card with its rulings.
    pub async fn get_card_details(&self, name: &str) -> CardDetailsResponse {
        match self.try_get_card_details(name).await {
            Ok(card) => {
                let rulings = self.rulings.rulings_for(&card);
                CardDetailsResponse::ok(card, rulings)
            }
            Err(e) => {
                tracing::warn!("Card details failed: {}", e);
                CardDetailsResponse::failure(&e)
            }
        }
    }

    async fn try_get_card_details(&self, name: &str) -> Result<CardRecord, EngineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::invalid_request("card name is empty"));
        }

        resolve_with_timeout(&*self.resolver, name, self.resolve_config.timeout())
            .await
            .map_err(|e| match e {
                ResolveError::Unavailable(msg) => EngineError::upstream_unavailable(msg),
                ResolveError::NotFound(_) | ResolveError::Timeout { .. } => EngineError::card_not_found(name),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MockCardResolver;

    fn service(resolver: MockCardResolver) -> DeckService<MockCardResolver> {
        DeckService::new(Arc::new(resolver))
    }

    #[tokio::test]
    async fn test_blank_text_is_invalid_request() {
        let mut resolver = MockCardResolver::new();
        resolver.expect_resolve().never();
        let response = service(resolver).analyze_deck("  \n\t\n").await;
        assert!(!response.success);
        assert!(response.analysis.is_none());
        assert!(response.error.unwrap().starts_with("Invalid request"));
    }

    #[tokio::test]
    async fn test_comment_only_text_is_empty_deck() {
        let mut resolver = MockCardResolver::new();
        resolver.expect_resolve().never();
        let response = service(resolver).analyze_deck("# Main\n# Extra Deck\n").await;
        assert!(response.success);
        let analysis = response.analysis.unwrap();
        assert_eq!(analysis.scores(), [0; 4]);
        assert_eq!(analysis.recommendations, vec![crate::analysis::TOO_SMALL_TO_ANALYZE.to_string()]);
    }

    #[tokio::test]
    async fn test_all_unavailable_is_upstream_failure() {
        let mut resolver = MockCardResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Err(ResolveError::unavailable("connection refused")));
        let response = service(resolver).analyze_deck("Dark Magician\nKuriboh").await;
        assert!(!response.success);
        assert!(response.error.unwrap().contains("unavailable"));
    }

    #[tokio::test]
    async fn test_partial_unavailable_degrades() {
        let mut resolver = MockCardResolver::new();
        resolver.expect_resolve().returning(|name| match name {
            "Dark Magician" => Ok(CardRecord::new("Dark Magician", "Normal Monster")),
            _ => Err(ResolveError::unavailable("flaky")),
        });
        let response = service(resolver).analyze_deck("Dark Magician\nKuriboh").await;
        assert!(response.success);
        let analysis = response.analysis.unwrap();
        assert_eq!(analysis.card_type_count("unknown"), 1);
        assert_eq!(response.card_data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_card_details_not_found() {
        let mut resolver = MockCardResolver::new();
        resolver
            .expect_resolve()
            .returning(|name| Err(ResolveError::not_found(name)));
        let response = service(resolver).get_card_details("Nope").await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Card not found: Nope"));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("card").is_none());
    }

    #[tokio::test]
    async fn test_card_details_generates_rulings() {
        let mut resolver = MockCardResolver::new();
        resolver.expect_resolve().returning(|_| {
            Ok(CardRecord::new("Pot of Greed", "Spell Card").with_description("Draw 2 cards."))
        });
        let response = service(resolver).get_card_details("  Pot of Greed ").await;
        assert!(response.success);
        assert!(response.rulings.unwrap().len() >= 2);
        assert_eq!(response.card.unwrap().name, "Pot of Greed");
    }
}
