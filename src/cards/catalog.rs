//! In-memory card catalog for name lookup.
//!
//! The `CardCatalog` stores card records keyed by canonical name. It loads
//! YGOPRODeck-style dumps and doubles as a `CardResolver`, searching in
//! order: exact name, normalized name, known spelling variations, the
//! closest fuzzy match above a similarity threshold, then a token search
//! over distinctive words for abbreviated entries.

use std::path::Path;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resolver::{CardResolver, ResolveError};

use super::names::{distinctive_tokens, name_variations, normalize_name, similarity, tokens};
use super::record::CardRecord;

/// Default minimum similarity for fuzzy matches.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Errors from building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Card already registered: {0}")]
    DuplicateName(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Provider payload shape: `{"data": [ ...cards ]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardInfoPayload {
    #[serde(default)]
    pub data: Vec<CardRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Payload(CardInfoPayload),
    List(Vec<CardRecord>),
}

/// How a catalog lookup matched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchKind {
    Exact,
    Normalized,
    Variation,
    /// Fuzzy match with its similarity score.
    Fuzzy(f64),
    /// Distinctive-word match with its similarity score.
    Token(f64),
}

/// A catalog hit.
#[derive(Clone, Debug)]
pub struct CatalogMatch<'a> {
    pub record: &'a CardRecord,
    pub kind: MatchKind,
}

/// Name-indexed store of card records.
///
/// ## Example
///
/// ```
/// use ygo_deck::cards::{CardCatalog, CardRecord, MatchKind};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardRecord::new("Harpie's Feather Duster", "Spell Card")).unwrap();
///
/// let hit = catalog.find("harpies feather duster").unwrap();
/// assert_eq!(hit.record.name, "Harpie's Feather Duster");
/// assert_eq!(hit.kind, MatchKind::Normalized);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardRecord>,
    /// normalized name -> canonical name
    normalized: FxHashMap<String, String>,
    /// canonical names in registration order, for deterministic fuzzy scans
    order: Vec<String>,
    similarity_threshold: f64,
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self {
            cards: FxHashMap::default(),
            normalized: FxHashMap::default(),
            order: Vec::new(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fuzzy-match threshold.
    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Parse a provider dump (`{"data": [...]}`) or a bare JSON array.
    ///
    /// Duplicate names in the dump keep the first record.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Payload(payload) => payload.data,
            CatalogFile::List(cards) => cards,
        };

        let mut catalog = Self::new();
        for card in cards {
            if let Err(CatalogError::DuplicateName(name)) = catalog.register(card) {
                tracing::debug!("Skipping duplicate catalog entry: {}", name);
            }
        }
        tracing::info!("Loaded {} cards into catalog", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog file from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Register a card record.
    pub fn register(&mut self, card: CardRecord) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.name) {
            return Err(CatalogError::DuplicateName(card.name));
        }
        self.normalized
            .entry(normalize_name(&card.name))
            .or_insert_with(|| card.name.clone());
        self.order.push(card.name.clone());
        self.cards.insert(card.name.clone(), card);
        Ok(())
    }

    /// Exact-name lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.cards.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.order.iter().filter_map(|name| self.cards.get(name))
    }

    /// Find cards matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> impl Iterator<Item = &CardRecord>
    where
        F: Fn(&CardRecord) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }

    /// Search for a typed name, most precise strategy first.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<CatalogMatch<'_>> {
        if let Some(record) = self.cards.get(name) {
            return Some(CatalogMatch { record, kind: MatchKind::Exact });
        }

        if let Some(record) = self.by_normalized(name) {
            return Some(CatalogMatch { record, kind: MatchKind::Normalized });
        }

        for variation in name_variations(name).iter().skip(1) {
            if let Some(record) = self.cards.get(variation).or_else(|| self.by_normalized(variation)) {
                return Some(CatalogMatch { record, kind: MatchKind::Variation });
            }
        }

        if let Some((record, score)) = self.best_fuzzy(name) {
            return Some(CatalogMatch { record, kind: MatchKind::Fuzzy(score) });
        }

        self.best_token(name)
            .map(|(record, score)| CatalogMatch { record, kind: MatchKind::Token(score) })
    }

    fn by_normalized(&self, name: &str) -> Option<&CardRecord> {
        self.normalized
            .get(&normalize_name(name))
            .and_then(|canonical| self.cards.get(canonical))
    }

    fn best_fuzzy(&self, name: &str) -> Option<(&CardRecord, f64)> {
        let mut best: Option<(&CardRecord, f64)> = None;
        for record in self.iter() {
            let score = similarity(name, &record.name);
            if score < self.similarity_threshold {
                continue;
            }
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((record, score));
            }
        }
        best
    }

    /// Token search: rank cards by the length of the distinctive typed
    /// words they contain, plus ten times the similarity.
    ///
    /// The best candidate is accepted when its similarity reaches a third
    /// below the fuzzy threshold, or when it is the only card containing
    /// every distinctive word.
    fn best_token(&self, name: &str) -> Option<(&CardRecord, f64)> {
        let wanted = distinctive_tokens(name);
        if wanted.is_empty() {
            return None;
        }
        let wanted_weight: usize = wanted.iter().map(|t| t.chars().count()).sum();

        let mut best: Option<(&CardRecord, f64, f64, bool)> = None;
        let mut full_cover = 0usize;
        for record in self.iter() {
            let have = tokens(&record.name);
            let matched: usize = wanted
                .iter()
                .filter(|t| have.contains(t))
                .map(|t| t.chars().count())
                .sum();
            if matched == 0 {
                continue;
            }
            let covers_all = matched == wanted_weight;
            if covers_all {
                full_cover += 1;
            }

            let sim = similarity(name, &record.name);
            let score = matched as f64 + sim * 10.0;
            if best.map_or(true, |(_, top, _, _)| score > top) {
                best = Some((record, score, sim, covers_all));
            }
        }

        let (record, _, sim, covers_all) = best?;
        if sim >= self.similarity_threshold / 1.5 || (covers_all && full_cover == 1) {
            tracing::debug!("Token match for '{}': '{}' (similarity: {:.2})", name, record.name, sim);
            Some((record, sim))
        } else {
            None
        }
    }
}

#[async_trait]
impl CardResolver for CardCatalog {
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError> {
        match self.find(name) {
            Some(hit) => {
                match hit.kind {
                    MatchKind::Fuzzy(score) => tracing::info!(
                        "Fuzzy match for '{}': '{}' (similarity: {:.2})",
                        name,
                        hit.record.name,
                        score
                    ),
                    MatchKind::Token(score) => tracing::info!(
                        "Token search match for '{}': '{}' (similarity: {:.2})",
                        name,
                        hit.record.name,
                        score
                    ),
                    _ => {}
                }
                Ok(hit.record.clone())
            }
            None => Err(ResolveError::not_found(name)),
        }
    }
}
