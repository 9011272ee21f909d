//! Card resolver trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cards::CardRecord;

use super::error::ResolveError;

/// Maps a card name to its canonical record.
///
/// Implementations must be idempotent and side-effect free from the
/// caller's point of view: the same name returns equivalent data on every
/// call. Caching, rate limiting and fuzzy matching are implementation
/// details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardResolver: Send + Sync {
    /// Look up a card by the name the user typed.
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError>;
}

#[async_trait]
impl<R: CardResolver + ?Sized> CardResolver for Arc<R> {
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError> {
        (**self).resolve(name).await
    }
}

#[async_trait]
impl<R: CardResolver + ?Sized> CardResolver for Box<R> {
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError> {
        (**self).resolve(name).await
    }
}
