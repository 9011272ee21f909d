//! HTTP resolver for the public YGOPRODeck card-info API.
//!
//! Requests are spaced by a minimum interval to respect the provider's
//! rate limit. HTTP 400 and empty payloads mean the card does not exist;
//! transport failures and other statuses mean the provider is unavailable.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::cards::{CardInfoPayload, CardRecord};

use super::error::ResolveError;
use super::traits::CardResolver;

/// Public API root.
pub const DEFAULT_BASE_URL: &str = "https://db.ygoprodeck.com/api/v7";

const CARD_INFO_ENDPOINT: &str = "/cardinfo.php";

/// Minimum gap between two requests.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(100);

/// YGOPRODeck API client.
pub struct YgoProDeckClient {
    http: reqwest::Client,
    base_url: String,
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Default for YgoProDeckClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl YgoProDeckClient {
    /// Create a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            min_interval: DEFAULT_MIN_INTERVAL,
            last_request: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }

    async fn respect_rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Extract the first card from a card-info response body.
pub fn parse_card_info(name: &str, body: &str) -> Result<CardRecord, ResolveError> {
    let payload: CardInfoPayload = serde_json::from_str(body)
        .map_err(|e| ResolveError::unavailable(format!("invalid card-info payload: {e}")))?;
    payload
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::not_found(name))
}

#[async_trait]
impl CardResolver for YgoProDeckClient {
    async fn resolve(&self, name: &str) -> Result<CardRecord, ResolveError> {
        self.respect_rate_limit().await;

        let url = format!("{}{}", self.base_url, CARD_INFO_ENDPOINT);
        tracing::debug!("Making API request to: {} (name={})", url, name);

        let response = self
            .http
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| ResolveError::unavailable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::not_found(name));
        }
        if !status.is_success() {
            return Err(ResolveError::unavailable(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::unavailable(e.to_string()))?;
        parse_card_info(name, &body)
    }
}
