//! Correlation identifier type.
//!
//! Distinct from the trace id: this is the application-level request
//! identifier used to tie log lines and spans to one caller-visible
//! request. Callers may supply any non-empty string; locally generated
//! ids are UUID v4 ("likely unique across the process lifetime", not
//! cryptographic).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque per-request correlation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        CorrelationId(Uuid::new_v4().to_string())
    }

    /// Accept a caller-supplied value. Empty or blank values are
    /// rejected so the boundary falls back to generation.
    pub fn from_supplied(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(CorrelationId(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_non_empty_and_distinct() {
        let a = CorrelationId::generate();
        let b = CorrelationId::generate();

        assert!(!a.as_str().is_empty());
        assert!(!b.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_supplied_value_accepted_verbatim() {
        let id = CorrelationId::from_supplied("req-42").unwrap();
        assert_eq!(id.as_str(), "req-42");
    }

    #[test]
    fn test_blank_values_rejected() {
        assert!(CorrelationId::from_supplied("").is_none());
        assert!(CorrelationId::from_supplied("   ").is_none());
    }
}
