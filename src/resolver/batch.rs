//! Fan-out/fan-in resolution of every distinct name in a decklist.
//!
//! Each distinct name is looked up in its own tokio task, bounded by a
//! semaphore. All tasks share one deadline covering both the wait for a
//! permit and the lookup, so a stalled provider costs at most one timeout
//! per request. `resolve_all` returns only after every task has finished
//! or failed, so callers never see a partial set.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;

use crate::cards::CardRecord;
use crate::config::ConfigError;

use super::error::ResolveError;
use super::traits::CardResolver;

/// Resolution limits for one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Time bound in milliseconds for a whole batch, or for a single lookup.
    /// A lookup still pending when it runs out counts as not found.
    pub timeout_ms: u64,

    /// Maximum lookups in flight at once.
    pub max_concurrency: usize,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            max_concurrency: 8,
        }
    }
}

impl ResolveConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max;
        self
    }

    /// Time bound as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        crate::config::load_json(path.as_ref())
    }
}

/// Result of resolving one decklist's distinct names.
///
/// Records are keyed by the name as typed. Names that failed are listed
/// in request order.
#[derive(Clone, Debug, Default)]
pub struct ResolvedCards {
    records: FxHashMap<String, CardRecord>,
    missing: Vec<String>,
    unavailable: usize,
    requested: usize,
}

impl ResolvedCards {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-known records, for synchronous callers.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CardRecord>,
    {
        let mut resolved = Self::new();
        for record in records {
            resolved.requested += 1;
            resolved.records.insert(record.name.clone(), record);
        }
        resolved
    }

    /// Record the outcome of one lookup.
    pub fn insert(&mut self, name: &str, outcome: Result<CardRecord, ResolveError>) {
        self.requested += 1;
        match outcome {
            Ok(record) => {
                self.records.insert(name.to_string(), record);
            }
            Err(err) => {
                if err.is_unavailable() {
                    self.unavailable += 1;
                }
                self.missing.push(name.to_string());
            }
        }
    }

    /// Record for a typed name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.records.get(name)
    }

    /// Names that could not be resolved, in request order.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// True when there was work to do and every lookup hit an unavailable provider.
    #[must_use]
    pub fn upstream_unavailable(&self) -> bool {
        self.requested > 0 && self.unavailable == self.requested
    }

    /// Typed name -> canonical name, for lookups that corrected the spelling.
    #[must_use]
    pub fn corrections(&self) -> BTreeMap<String, String> {
        self.records
            .iter()
            .filter(|(typed, record)| **typed != record.name)
            .map(|(typed, record)| (typed.clone(), record.name.clone()))
            .collect()
    }

    /// Typed name -> record, ordered by name.
    #[must_use]
    pub fn card_data(&self) -> BTreeMap<String, CardRecord> {
        self.records
            .iter()
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect()
    }
}

/// Look up one name under a time bound.
pub async fn resolve_with_timeout<R>(
    resolver: &R,
    name: &str,
    limit: Duration,
) -> Result<CardRecord, ResolveError>
where
    R: CardResolver + ?Sized,
{
    match tokio::time::timeout(limit, resolver.resolve(name)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(timed_out(name, limit)),
    }
}

fn timed_out(name: &str, limit: Duration) -> ResolveError {
    ResolveError::Timeout {
        name: name.to_string(),
        millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
    }
}

/// Resolve every name concurrently and wait for all of them.
///
/// Each lookup runs as an independent task. The configured timeout is a
/// request-wide deadline: a lookup still queued for a permit when it
/// passes times out like one stuck in the provider. Failures, timeouts and
/// panicked tasks become missing entries; this function itself never
/// fails.
pub async fn resolve_all<R>(resolver: Arc<R>, names: &[String], config: &ResolveConfig) -> ResolvedCards
where
    R: CardResolver + ?Sized + 'static,
{
    let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
    let limit = config.timeout();
    let deadline = Instant::now() + limit;
    let mut tasks = JoinSet::new();

    tracing::debug!("Resolving {} distinct card names", names.len());

    for (index, name) in names.iter().enumerate() {
        let resolver = Arc::clone(&resolver);
        let semaphore = Arc::clone(&semaphore);
        let name = name.clone();

        tasks.spawn(async move {
            let lookup = async {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|_| ResolveError::unavailable("resolver pool closed"))?;
                resolver.resolve(&name).await
            };
            let outcome = match tokio::time::timeout_at(deadline, lookup).await {
                Ok(outcome) => outcome,
                Err(_) => Err(timed_out(&name, limit)),
            };
            (index, outcome)
        });
    }

    let mut outcomes: Vec<Option<Result<CardRecord, ResolveError>>> = vec![None; names.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome),
            Err(err) => tracing::warn!("Card lookup task failed: {}", err),
        }
    }

    let mut resolved = ResolvedCards::new();
    for (name, outcome) in names.iter().zip(outcomes) {
        let outcome = outcome.unwrap_or_else(|| Err(ResolveError::not_found(name)));
        if let Err(err) = &outcome {
            tracing::warn!("{}", err);
        }
        resolved.insert(name, outcome);
    }

    tracing::debug!(
        "Resolved {}/{} card names ({} missing)",
        resolved.found_count(),
        resolved.requested(),
        resolved.missing().len()
    );

    resolved
}
