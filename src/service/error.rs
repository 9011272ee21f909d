//! Request-level errors.

/// Why a request failed as a whole. Per-card lookup failures never end up
/// here; they degrade to unknown cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The request was rejected before any lookup.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Every lookup failed because the card provider could not be reached.
    #[error("Card provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),
}

impl EngineError {
    pub fn invalid_request(msg: impl ToString) -> Self {
        Self::InvalidRequest(msg.to_string())
    }

    pub fn upstream_unavailable(msg: impl ToString) -> Self {
        Self::UpstreamUnavailable(msg.to_string())
    }

    pub fn card_not_found(name: impl ToString) -> Self {
        Self::CardNotFound(name.to_string())
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_))
    }
}
