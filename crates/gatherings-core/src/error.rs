//! Error types for gatherings-core.

use thiserror::Error;

/// Error type carried by [`LastEventSource`](crate::LastEventSource)
/// implementations.
///
/// Lookup failures are surfaced to the caller exactly as the backend
/// produced them; the core neither retries nor wraps them.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Validation errors raised when constructing domain records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Review windows cannot run backwards in time.
    #[error("review duration must be non-negative, got {hours}h")]
    NegativeReviewDuration { hours: i64 },
}
