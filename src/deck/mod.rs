//! Decklist parsing and per-section counts.
//!
//! ## Key Types
//!
//! - `DeckList`: Main and Extra Deck name sequences parsed from text
//! - `DeckSection`: Which pile an entry belongs to
//! - `CardCount`: Name -> copies, iterable in first-seen order

pub mod counts;
pub mod list;

pub use counts::CardCount;
pub use list::{DeckList, DeckSection, COMMENT_MARKER, EXTRA_DECK_MARKER};
