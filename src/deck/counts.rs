//! Per-section card occurrence counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from card name to occurrence count.
///
/// Keys are unique. Iteration follows first-seen order so displays list
/// cards the way the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCount {
    /// Names in first-seen order.
    order: Vec<String>,

    /// name -> count
    counts: FxHashMap<String, u32>,
}

impl CardCount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more copy of `name`.
    pub fn add(&mut self, name: &str) {
        self.add_copies(name, 1);
    }

    /// Record `copies` more copies of `name`.
    pub fn add_copies(&mut self, name: &str, copies: u32) {
        match self.counts.get_mut(name) {
            Some(count) => *count += copies,
            None => {
                self.order.push(name.to_string());
                self.counts.insert(name.to_string(), copies);
            }
        }
    }

    /// Copies of `name`, 0 if absent.
    #[must_use]
    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.order.iter().map(|n| (n.as_str(), self.get(n)))
    }

    /// Number of distinct names run at `copies` or more.
    #[must_use]
    pub fn names_with_at_least(&self, copies: u32) -> usize {
        self.counts.values().filter(|&&c| c >= copies).count()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CardCount {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = Self::new();
        for name in iter {
            counts.add(name.as_ref());
        }
        counts
    }
}
