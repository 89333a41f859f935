//! Configuration management for the proxy
//!
//! Configuration is loaded from environment variables. A missing API key is
//! not a startup failure: each proxied request reports it instead.

use anyhow::{Context, Result};
use std::env;

/// Gemini `generateContent` endpoint used when `GEMINI_API_URL` is not set
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Upstream generateContent endpoint (without query string)
    pub gemini_api_url: String,
    /// Upstream API key, never sent to clients
    pub gemini_api_key: Option<String>,

    /// Emit JSON log lines instead of the human-readable format
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("PROXY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PROXY_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PROXY_PORT")?,

            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),

            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    /// The API key exactly as configured, if set and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("gemini_api_url", &self.gemini_api_url)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("json_logs", &self.json_logs)
            .finish()
    }
}
