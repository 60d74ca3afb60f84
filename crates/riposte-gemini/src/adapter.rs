use std::{env, sync::Arc};

use riposte_core::error::{Result, RiposteError};

use crate::client::GeminiClient;

/// Thin wrapper that wires the HTTP client [`GeminiClient`] into a value that
/// implements the `riposte-core` provider traits.
///
/// An adapter is one **transport client** in fallback terms: credentials plus
/// a base address. Building two adapters (one against the official endpoint,
/// one against a reverse proxy via [`GeminiAdapterBuilder::with_base_url`])
/// and handing both to the client is how endpoint fallback is configured.
pub struct GeminiAdapter {
    pub(crate) client: Arc<GeminiClient>,
}

/// Builder for [`GeminiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use riposte_gemini::GeminiAdapterBuilder;
///
/// let backend = GeminiAdapterBuilder::new_from_env()
///     .build()
///     .expect("GEMINI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) http: Option<reqwest::Client>,
}

impl GeminiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `GEMINI_API_KEY`
    /// environment variable. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Target a wire-compatible endpoint other than the official one
    /// (reverse proxy, regional mirror, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supply a pre-configured `reqwest::Client` (proxy settings, custom TLS, …).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`RiposteError::InvalidRequest`] – if the API key is missing.
    pub fn build(self) -> Result<GeminiAdapter> {
        let api_key = self.api_key.ok_or(RiposteError::InvalidRequest(
            "missing env variable: `GEMINI_API_KEY`".into(),
        ))?;

        let client = match (self.http, self.base_url) {
            (Some(http), base_url) => GeminiClient::with_http(api_key, http, base_url),
            (None, Some(base_url)) => GeminiClient::new(api_key).with_base_url(base_url),
            (None, None) => GeminiClient::new(api_key),
        };

        Ok(GeminiAdapter {
            client: Arc::new(client),
        })
    }
}
