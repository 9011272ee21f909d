//! Resolver layer tests: batch resolution, caching and snapshots.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ygo_deck::{
    resolve_all, CachingResolver, CardCatalog, CardRecord, CardResolver, ResolveConfig, ResolveError,
};

/// Catalog wrapper that counts lookups and tracks peak concurrency.
#[derive(Default)]
struct CountingResolver {
    catalog: CardCatalog,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl CountingResolver {
    fn new() -> Self {
        Self {
            catalog: common::sample_catalog(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CardResolver for CountingResolver {
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.catalog.resolve(name).await
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_resolve_all_mixes_hits_and_misses() {
    let resolver = Arc::new(common::sample_catalog());
    let requested = names(&["Dark Magician", common::UNKNOWN_NAMES[0], "Pot of Greed"]);

    let resolved = resolve_all(resolver, &requested, &ResolveConfig::default()).await;

    assert_eq!(resolved.requested(), 3);
    assert_eq!(resolved.found_count(), 2);
    assert_eq!(resolved.missing(), &[common::UNKNOWN_NAMES[0].to_string()]);
    assert!(!resolved.upstream_unavailable());
}

#[tokio::test]
async fn test_resolve_all_respects_concurrency_limit() {
    let resolver = Arc::new(CountingResolver::new());
    let requested: Vec<String> = common::sample_records().into_iter().map(|r| r.name).collect();
    let config = ResolveConfig::default().with_max_concurrency(2);

    let resolved = resolve_all(Arc::clone(&resolver), &requested, &config).await;

    assert_eq!(resolved.found_count(), requested.len());
    assert!(resolver.peak.load(Ordering::SeqCst) <= 2);
}

#[tokio::test]
async fn test_cache_serves_repeat_lookups() {
    let cache = CachingResolver::new(CountingResolver::new());

    for _ in 0..3 {
        let card = cache.resolve("Dark Magician").await.expect("found");
        assert_eq!(card.name, "Dark Magician");
    }
    assert!(cache.resolve(common::UNKNOWN_NAMES[0]).await.is_err());
    assert!(cache.resolve(common::UNKNOWN_NAMES[0]).await.is_err());

    // misses are never cached
    assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 3);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_snapshot_restores_cache() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cards.bin");

    let warm = CachingResolver::new(common::sample_catalog());
    warm.resolve("Dark Magicain").await.expect("fuzzy hit");
    warm.resolve("Solemn Strike").await.expect("exact hit");
    assert_eq!(warm.save_snapshot(&path).await.expect("saved"), 2);

    let cold = CachingResolver::new(CardCatalog::new());
    assert_eq!(cold.load_snapshot(&path).await.expect("loaded"), 2);

    let card = cold.resolve("Dark Magicain").await.expect("served from snapshot");
    assert_eq!(card.name, "Dark Magician");
    assert!(cold.resolve("Pot of Greed").await.is_err());
}
