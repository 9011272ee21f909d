//! Card system: records, name matching, and the in-memory catalog.
//!
//! ## Key Types
//!
//! - `CardRecord`: Canonical, immutable card metadata
//! - `CardCatalog`: Name-indexed record store, also a `CardResolver`
//! - `MatchKind`: How a catalog lookup matched (exact, normalized, fuzzy, token)
//! - `LimitStatus`: Forbidden & Limited list status of a record
//!
//! Records are never mutated after resolution; the analyzer only reads them.

pub mod banlist;
pub mod catalog;
pub mod names;
pub mod record;

pub use banlist::{BanlistInfo, LimitStatus, MAX_COPIES};
pub use catalog::{CardCatalog, CardInfoPayload, CatalogError, CatalogMatch, MatchKind};
pub use record::CardRecord;
