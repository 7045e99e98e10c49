//! Error types for the computation core.
//!
//! Malformed upstream data never errors: money and timestamps degrade to
//! documented defaults at their parse boundaries. The only rejected input
//! is an invalid quantity, since clamping it would corrupt every derived
//! total downstream.

/// Pricing boundary error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("quantity must be at least 1 (got {qty})")]
    InvalidQuantity { qty: i64 },
}

/// Failure reported by a [`CandidateSource`](crate::matching::CandidateSource).
///
/// Contained per strategy inside the matcher; it never propagates past
/// [`find_other_occurrences`](crate::matching::find_other_occurrences).
#[derive(Debug, Clone, thiserror::Error)]
#[error("candidate fetch failed: {0}")]
pub struct FetchError(pub String);

impl From<String> for FetchError {
    fn from(msg: String) -> Self {
        FetchError(msg)
    }
}

impl From<&str> for FetchError {
    fn from(msg: &str) -> Self {
        FetchError(msg.to_string())
    }
}
