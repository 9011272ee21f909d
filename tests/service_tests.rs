//! Request surface tests.
//!
//! These tests drive `DeckService` through its two operations against
//! catalog-backed and hand-written resolvers, covering degradation on
//! unknown, slow and unreachable providers.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ygo_deck::{
    CardCatalog, CardRecord, CardResolver, DeckService, ResolveConfig, ResolveError,
};

fn catalog_service() -> DeckService<CardCatalog> {
    DeckService::new(Arc::new(common::sample_catalog()))
}

/// Sleeps before answering from the catalog.
struct SlowResolver {
    catalog: CardCatalog,
    slow_name: &'static str,
    delay: Duration,
}

#[async_trait]
impl CardResolver for SlowResolver {
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError> {
        if name == self.slow_name {
            tokio::time::sleep(self.delay).await;
        }
        self.catalog.resolve(name).await
    }
}

/// Provider that is always down, counting calls.
#[derive(Default)]
struct DownResolver {
    calls: AtomicUsize,
}

#[async_trait]
impl CardResolver for DownResolver {
    async fn resolve(&self, _name: &str) -> Result<CardRecord, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ResolveError::unavailable("connection refused"))
    }
}

#[tokio::test]
async fn test_analyze_deck_end_to_end() {
    let text = "Dark Magician\nDark Magician\nPot of Greed\nAsh Blossom & Joyous Spring\n# Extra Deck\nStardust Dragon";
    let response = catalog_service().analyze_deck(text).await;

    assert!(response.success);
    assert!(response.error.is_none());
    let analysis = response.analysis.expect("analysis");
    assert_eq!(analysis.deck_size, 5);
    assert_eq!(analysis.extra_deck_size, 1);
    assert!(analysis.unknown_cards.is_empty());

    let card_data = response.card_data.expect("card data");
    assert_eq!(card_data.len(), 4);
    assert_eq!(card_data["Stardust Dragon"].card_type, "Synchro Monster");

    let deck = response.deck.expect("parsed deck");
    assert_eq!(deck.main_deck.len(), 4);
}

/// Misspelled names resolve to the closest card and are reported.
#[tokio::test]
async fn test_name_corrections() {
    let response = catalog_service()
        .analyze_deck("Dark Magicain\nharpies feather duster")
        .await;

    let analysis = response.analysis.expect("analysis");
    assert_eq!(analysis.name_corrections["Dark Magicain"], "Dark Magician");
    assert_eq!(
        analysis.name_corrections["harpies feather duster"],
        "Harpie's Feather Duster"
    );
    assert_eq!(analysis.card_type_count("unknown"), 0);
}

#[tokio::test]
async fn test_unknown_card_still_succeeds() {
    let text = format!("Dark Magician\n{}", common::UNKNOWN_NAMES[1]);
    let response = catalog_service().analyze_deck(&text).await;

    assert!(response.success);
    let analysis = response.analysis.expect("analysis");
    assert_eq!(analysis.card_type_count("unknown"), 1);
    assert_eq!(analysis.unknown_cards, vec![common::UNKNOWN_NAMES[1]]);
    assert!(!response.card_data.expect("card data").contains_key(common::UNKNOWN_NAMES[1]));
}

#[tokio::test]
async fn test_blank_text_is_rejected() {
    let response = catalog_service().analyze_deck("\r\n   \n").await;

    assert!(!response.success);
    assert!(response.analysis.is_none());
    assert!(response.error.expect("error").starts_with("Invalid request"));
}

/// Absent optional fields are left out of the JSON entirely.
#[tokio::test]
async fn test_failure_json_omits_absent_fields() {
    let response = catalog_service().analyze_deck("").await;
    let json = serde_json::to_value(&response).expect("serializable");
    let object = json.as_object().expect("object");

    assert_eq!(object.len(), 2);
    assert_eq!(object["success"], false);
    assert!(object.contains_key("error"));
    assert!(!object.contains_key("analysis"));
}

/// A lookup slower than the timeout counts as unknown without failing the request.
#[tokio::test]
async fn test_slow_lookup_times_out_to_unknown() {
    let resolver = SlowResolver {
        catalog: common::sample_catalog(),
        slow_name: "Pot of Greed",
        delay: Duration::from_secs(5),
    };
    let service = DeckService::new(Arc::new(resolver))
        .with_resolve_config(ResolveConfig::default().with_timeout(Duration::from_millis(50)));

    let response = service.analyze_deck("Dark Magician\nPot of Greed").await;

    assert!(response.success);
    let analysis = response.analysis.expect("analysis");
    assert_eq!(analysis.card_type_count("unknown"), 1);
    assert_eq!(analysis.card_type_count("monsters"), 1);
    assert_eq!(analysis.unknown_cards, vec!["Pot of Greed"]);
}

#[tokio::test]
async fn test_unreachable_provider_fails_request() {
    let resolver = Arc::new(DownResolver::default());
    let service = DeckService::new(Arc::clone(&resolver));

    let response = service.analyze_deck("Dark Magician\nDark Magician\nPot of Greed").await;

    assert!(!response.success);
    assert!(response.error.expect("error").starts_with("Card provider unavailable"));
    // one lookup per distinct name
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_card_details_with_rulings() {
    let response = catalog_service().get_card_details("  Ash Blossom & Joyous Spring ").await;

    assert!(response.success);
    assert_eq!(response.card.expect("card").name, "Ash Blossom & Joyous Spring");
    let rulings = response.rulings.expect("rulings");
    assert!(rulings.len() >= 3);
    assert!(rulings.iter().any(|r| r.to_lowercase().contains("once per turn")));
}

#[tokio::test]
async fn test_card_details_not_found() {
    let response = catalog_service().get_card_details(common::UNKNOWN_NAMES[2]).await;

    assert!(!response.success);
    assert!(response.card.is_none());
    assert!(response.rulings.is_none());
    assert!(response.error.expect("error").starts_with("Card not found"));
}

#[tokio::test]
async fn test_card_details_provider_down() {
    let response = DeckService::new(Arc::new(DownResolver::default()))
        .get_card_details("Dark Magician")
        .await;

    assert!(!response.success);
    assert!(response.error.expect("error").starts_with("Card provider unavailable"));
}
