use reqwest::StatusCode;
use riposte_core::error::RiposteError;

/// High-level error type covering every failure mode the client can hit.
///
/// The rendered message is what the core layer classifies on, so `Api`
/// includes both status and body: a 429 or a quota marker anywhere in the
/// payload is enough to route the failure through the backoff path.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini format error: {0}")]
    Format(String),
}

impl From<GeminiError> for RiposteError {
    fn from(value: GeminiError) -> Self {
        RiposteError::Backend(Box::new(value))
    }
}
