//! Unified error type exposed by **`riposte-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`RiposteClient`](crate::client::RiposteClient).
//! The fallback controller never inspects provider errors directly; it asks
//! [`RiposteError::failure_kind`] and acts on the returned [`FailureKind`],
//! which keeps the fuzzy rate-limit sniffing confined to this module.

use std::error::Error;

use thiserror::Error as ThisError;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RiposteError>;

#[derive(Debug, ThisError)]
pub enum RiposteError {
    /// Failure while serialising or deserialising JSON payloads sent to / received
    /// from the generation service.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(#[source] Box<dyn Error + Send + Sync + 'static>),

    /// The request was rejected before it ever reached the wire (missing
    /// credentials, empty target lists, …). Never retried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The service answered, but the payload could not be turned into a record.
    #[error("malformed response: {0}")]
    Format(String),

    /// Every configured (transport client × model) combination was tried and
    /// failed. This is the only error a caller ever sees from a finished
    /// request; the underlying causes are logged, not carried.
    #[error("generation failed after exhausting all models and endpoints, try again")]
    Exhausted,
}

/// How the fallback controller should react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Quota or rate-limit signal: advance the model index, backing off once
    /// the model list wraps.
    RateLimited,
    /// Anything transient that a different transport client might not share:
    /// move to the next client immediately, no backoff.
    Transient,
    /// Not worth retrying anywhere.
    Fatal,
}

/// Substrings that mark a quota / rate-limit condition in provider payloads.
///
/// Matching on the rendered message keeps this working across transports that
/// surface the condition as a status code, an error enum or free text.
const RATE_LIMIT_MARKERS: [&str; 4] = ["429", "quota", "RESOURCE_EXHAUSTED", "too many requests"];

impl RiposteError {
    /// Classify this error for the fallback controller.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            RiposteError::InvalidRequest(_) | RiposteError::Exhausted => FailureKind::Fatal,
            other => {
                let rendered = other.to_string();
                if RATE_LIMIT_MARKERS.iter().any(|m| rendered.contains(m)) {
                    FailureKind::RateLimited
                } else {
                    FailureKind::Transient
                }
            }
        }
    }
}
