//! Service layer: the `AnalyzeDeck` and `GetCardDetails` operations.
//!
//! ## Key Types
//!
//! - `DeckService`: Owns a resolver and an analyzer, answers requests
//! - `AnalyzeDeckResponse` / `CardDetailsResponse`: JSON response shapes
//! - `EngineError`: Request-level failures

pub mod api;
pub mod error;

pub use api::{AnalyzeDeckResponse, CardDetailsResponse, DeckService};
pub use error::EngineError;
