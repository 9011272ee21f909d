//! Card resolution: the boundary to card-metadata providers.
//!
//! ## Key Types
//!
//! - `CardResolver`: Async name -> `CardRecord` lookup
//! - `ResolveError`: NotFound / Timeout (per card) and Unavailable (provider)
//! - `ResolvedCards`: Outcome of resolving one decklist
//! - `CachingResolver`: Append-only name-keyed cache decorator
//!
//! ## Concurrency
//!
//! `resolve_all` fans out one task per distinct name and joins them all
//! before returning. Every lookup is time-bounded, so a stalled provider
//! degrades cards to unknown instead of stalling the request.

pub mod batch;
pub mod cache;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod traits;

pub use batch::{resolve_all, resolve_with_timeout, ResolveConfig, ResolvedCards};
pub use cache::{CachingResolver, SnapshotError};
pub use error::ResolveError;
#[cfg(feature = "http")]
pub use http::YgoProDeckClient;
pub use traits::CardResolver;

#[cfg(test)]
pub use traits::MockCardResolver;
