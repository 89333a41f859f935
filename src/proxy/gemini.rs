//! Gemini upstream client
//!
//! Sends the caller's JSON to the `generateContent` endpoint with the
//! server-held key attached, and hands back the raw reply.

use anyhow::Context;
use async_trait::async_trait;
use axum::http::StatusCode;
use bytes::Bytes;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, instrument};

use super::headers::{build_default_headers, redact_credential, with_credential};
use crate::{
    config::Config,
    error::{ProxyError, ProxyResult},
};

/// Raw reply from the upstream API
///
/// The body is kept as the exact bytes received so a relayed response is
/// byte-identical to what the upstream sent.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
    has_error_field: bool,
}

impl UpstreamReply {
    /// Build a reply from a status and body, which must be JSON
    pub fn parse(status: StatusCode, body: Bytes) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_slice(&body)?;
        let has_error_field = document.get("error").is_some();

        Ok(Self {
            status,
            body,
            has_error_field,
        })
    }

    /// True for a non-2xx status or a body carrying an `error` field
    pub fn is_error(&self) -> bool {
        !self.status.is_success() || self.has_error_field
    }

    /// Status to send back to the caller
    ///
    /// A 2xx reply that carries an `error` field is reported as 500.
    pub fn client_status(&self) -> StatusCode {
        if !self.status.is_success() {
            self.status
        } else if self.has_error_field {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        }
    }
}

/// Upstream generative-AI API
#[async_trait]
pub trait GenerativeApi: Send + Sync {
    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Forward `body` to the content-generation endpoint using `api_key`
    async fn generate_content(&self, api_key: &str, body: &Value) -> ProxyResult<UpstreamReply>;
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&config.gemini_api_url)
            .with_context(|| format!("Invalid GEMINI_API_URL: {}", config.gemini_api_url))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeApi for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn generate_content(&self, api_key: &str, body: &Value) -> ProxyResult<UpstreamReply> {
        let url = with_credential(&self.endpoint, api_key);
        debug!(url = %redact_credential(&url), "Sending request to Gemini");

        // reqwest errors embed the URL, which carries the key
        let response = self
            .client
            .post(url)
            .headers(build_default_headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ProxyError::Transport(e.without_url()))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Transport(e.without_url()))?;

        debug!(status = %status, body_len = bytes.len(), "Received response from Gemini");

        UpstreamReply::parse(status, bytes).map_err(ProxyError::Decode)
    }
}
