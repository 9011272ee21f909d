//! Error types for card lookups.

/// Outcome of a failed card lookup.
///
/// `NotFound` and `Timeout` are per-card and recoverable: the analyzer
/// counts the card as unknown. `Unavailable` means the provider itself
/// could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The provider has no card by this name.
    #[error("Card not found: {0}")]
    NotFound(String),

    /// The lookup did not finish within the request's time bound.
    #[error("Lookup for {name} timed out after {millis} ms")]
    Timeout { name: String, millis: u64 },

    /// The provider is unreachable or returned garbage.
    #[error("Card provider unavailable: {0}")]
    Unavailable(String),
}

impl ResolveError {
    /// Create a NotFound error for a card name.
    pub fn not_found(name: impl ToString) -> Self {
        Self::NotFound(name.to_string())
    }

    /// Create an Unavailable error.
    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if the provider itself failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ResolveError::not_found("Kuriboh").to_string(),
            "Card not found: Kuriboh"
        );
        let timeout = ResolveError::Timeout {
            name: "Kuriboh".to_string(),
            millis: 250,
        };
        assert_eq!(timeout.to_string(), "Lookup for Kuriboh timed out after 250 ms");
    }

    #[test]
    fn test_predicates() {
        assert!(ResolveError::not_found("x").is_not_found());
        assert!(!ResolveError::not_found("x").is_unavailable());
        assert!(ResolveError::unavailable("down").is_unavailable());
    }
}
