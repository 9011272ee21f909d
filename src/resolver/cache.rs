//! Append-only, name-keyed card cache in front of another resolver.
//!
//! Card metadata changes rarely enough that entries are never invalidated.
//! Only successful lookups are stored. The cache can be persisted as a
//! bincode snapshot and reloaded on startup.

use std::path::Path;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::cards::CardRecord;

use super::error::ResolveError;
use super::traits::CardResolver;

/// Errors from saving or loading a cache snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Resolver decorator that remembers every card it has found.
pub struct CachingResolver<R> {
    inner: R,
    entries: RwLock<FxHashMap<String, CardRecord>>,
}

impl<R: CardResolver> CachingResolver<R> {
    /// Wrap a resolver with an empty cache.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// The wrapped resolver.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Cached record for a typed name, without consulting the inner resolver.
    pub async fn cached(&self, name: &str) -> Option<CardRecord> {
        self.entries.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Write all entries to `path`, sorted by name. Returns the entry count.
    pub async fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<usize, SnapshotError> {
        let mut entries: Vec<(String, CardRecord)> = self
            .entries
            .read()
            .await
            .iter()
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let bytes = bincode::serialize(&entries)?;
        tokio::fs::write(path.as_ref(), bytes).await?;

        tracing::info!(
            "Saved {} cached cards to {}",
            entries.len(),
            path.as_ref().display()
        );
        Ok(entries.len())
    }

    /// Merge a snapshot into the cache. Existing entries win.
    /// Returns the number of entries added.
    pub async fn load_snapshot(&self, path: impl AsRef<Path>) -> Result<usize, SnapshotError> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let loaded: Vec<(String, CardRecord)> = bincode::deserialize(&bytes)?;

        let mut guard = self.entries.write().await;
        let before = guard.len();
        for (name, record) in loaded {
            guard.entry(name).or_insert(record);
        }
        let added = guard.len() - before;

        tracing::info!("Loaded {} cached cards from {}", added, path.as_ref().display());
        Ok(added)
    }
}

#[async_trait]
impl<R: CardResolver> CardResolver for CachingResolver<R> {
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError> {
        if let Some(record) = self.cached(name).await {
            tracing::debug!("Using cached data for: {}", name);
            return Ok(record);
        }

        let record = self.inner.resolve(name).await?;
        self.entries
            .write()
            .await
            .entry(name.to_string())
            .or_insert_with(|| record.clone());
        Ok(record)
    }
}
