use async_stream::try_stream;
use bytes::BytesMut;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1beta::{GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Minimal HTTP client for the *generateContent* endpoint family.
///
/// * Model selection happens in the URL path, so both calls take the mapped
///   model name alongside the request body.
/// * Shares a single `reqwest::Client`, so cloning `GeminiClient` is cheap.
/// * A custom base URL turns this into a client for any wire-compatible
///   reverse proxy.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl GeminiClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 30 s timeout, Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Point this client at a different (wire-compatible) endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base = base_url.into();
        self
    }

    fn headers(&self) -> Result<HeaderMap, GeminiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| GeminiError::Format("API key is not a valid header value".into()))?,
        );
        Ok(headers)
    }

    /// Perform a **non-streaming** generation call.
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base, model);
        let resp = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(%status, "generateContent returned non-success status");
            return Err(GeminiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    /// Perform a **streaming** generation call over SSE.
    pub fn generate_content_stream(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> impl Stream<Item = Result<GenerateContentResponse, GeminiError>> + Send + '_ {
        use reqwest::header::ACCEPT;

        let url = format!("{}/models/{}:streamGenerateContent?alt=sse", self.base, model);

        try_stream! {
            let mut headers = self.headers()?;
            headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));

            let resp = self.http.post(url).headers(headers).json(&request).send().await?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                tracing::debug!(%status, "streamGenerateContent returned non-success status");
                return Err(GeminiError::Api { status, body })?;
            }

            let mut bytes_stream = resp.bytes_stream();
            let mut buf = BytesMut::new();

            while let Some(chunk) = bytes_stream.next().await {
                let chunk = chunk?;
                buf.extend_from_slice(&chunk);

                while let Some(pos) = buf.windows(2).position(|w| w == b"\n\n") {
                    let frame = buf.split_to(pos + 2);
                    if let Some(data) = data_payload(&frame)? {
                        let parsed: GenerateContentResponse = serde_json::from_str(data)?;
                        yield parsed;
                    }
                }
            }
        }
    }
}

/// Extract the `data:` payload of one SSE frame, if the frame carries one.
/// Comment frames and keep-alives come back as `None`.
fn data_payload(frame: &[u8]) -> Result<Option<&str>, GeminiError> {
    let frame = std::str::from_utf8(frame)
        .map_err(|_| GeminiError::Format("stream frame is not valid UTF-8".into()))?;
    Ok(frame
        .strip_prefix("data: ")
        .map(str::trim)
        .filter(|data| !data.is_empty()))
}
