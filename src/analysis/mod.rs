//! Aggregation and scoring: resolved decklist -> `AnalysisReport`.
//!
//! ## Key Types
//!
//! - `DeckAnalyzer`: Entry point, owns configuration and reference data
//! - `DeckProfile`: Per-request classification of every distinct card
//! - `DeckMetrics` / `Scores`: Saturating sub-metrics and the four scores
//! - `Feedback`: Strengths, weaknesses and recommendations
//! - `MetaProfile`: Reference environment for `meta_comparison`
//! - `AnalysisReport`: The serializable result
//!
//! ## Scoring
//!
//! Scores are sums of saturating counts, clamped to [0, 100]. Unresolved
//! cards count toward `card_types.unknown` and nothing else, so a deck of
//! unknown cards scores 0 everywhere.

pub mod analyzer;
pub mod composition;
pub mod config;
pub mod feedback;
pub mod meta;
pub mod report;
pub mod scoring;

pub use analyzer::DeckAnalyzer;
pub use composition::{CompositionSummary, DeckProfile, LimitViolation, ProfiledCard};
pub use config::{AnalyzerConfig, MetricTarget};
pub use feedback::{Feedback, FeedbackContext, TOO_SMALL_TO_ANALYZE};
pub use meta::{MetaProfile, DEFAULT_STAPLES};
pub use report::{main_archetype, AnalysisReport};
pub use scoring::{DeckMetrics, Scores};
