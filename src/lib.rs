//! # ygo-deck
//!
//! A Yu-Gi-Oh! deck composition and analysis engine.
//!
//! ## Design Principles
//!
//! 1. **Never fail on input**: Any decklist text parses. Cards that cannot
//!    be resolved degrade to `unknown` instead of failing the request.
//!
//! 2. **Deterministic**: The same text and the same resolver data always
//!    produce the same report, down to the serialized bytes.
//!
//! 3. **Providers at the edge**: Card metadata comes through the
//!    `CardResolver` trait. The engine never assumes where cards live.
//!
//! ## Pipeline
//!
//! raw text -> `DeckList` -> `resolve_all` -> `Classifier` ->
//! `DeckAnalyzer` -> `AnalysisReport`
//!
//! ## Modules
//!
//! - `deck`: Decklist parsing and per-section card counts
//! - `cards`: Card records, name normalization, the in-memory catalog
//! - `resolver`: Resolver trait, batch resolution, caching, HTTP client
//! - `classify`: Category, archetype, purpose and engine detection
//! - `analysis`: Metrics, scores, feedback, meta comparison, reports
//! - `rulings`: Generated ruling notes for card details
//! - `service`: The `AnalyzeDeck` / `GetCardDetails` request surface
//! - `config`: JSON configuration loading

pub mod analysis;
pub mod cards;
pub mod classify;
pub mod config;
pub mod deck;
pub mod resolver;
pub mod rulings;
pub mod service;

// Re-export commonly used types
pub use crate::deck::{CardCount, DeckList, DeckSection};

pub use crate::cards::{BanlistInfo, CardCatalog, CardRecord, CatalogError, LimitStatus, MatchKind};

pub use crate::resolver::{
    resolve_all, CachingResolver, CardResolver, ResolveConfig, ResolveError, ResolvedCards,
};

#[cfg(feature = "http")]
pub use crate::resolver::YgoProDeckClient;

pub use crate::classify::{
    ArchetypeTagger, CardCategory, CardFamily, CardPurpose, Classification, Classifier, EngineDetector,
};

pub use crate::analysis::{
    AnalysisReport, AnalyzerConfig, CompositionSummary, DeckAnalyzer, LimitViolation, MetaProfile,
};

pub use crate::rulings::RulingGenerator;

pub use crate::service::{AnalyzeDeckResponse, CardDetailsResponse, DeckService, EngineError};

pub use crate::config::ConfigError;
