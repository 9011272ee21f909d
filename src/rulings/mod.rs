//! Ruling notes for card details.
//!
//! ## Key Types
//!
//! - `RulingGenerator`: Notes from card text patterns and card properties
//! - `EffectProfile`: The effect patterns found in one card text
//! - `RulingsData`: Per-card and per-archetype notes loaded from JSON

pub mod generator;
pub mod patterns;

pub use generator::{RulingGenerator, RulingsData, MIN_GENERATED_RULINGS, NO_TEXT_RULING};
pub use patterns::{EffectPattern, EffectProfile};
