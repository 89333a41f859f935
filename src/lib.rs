//! Gemini Proxy - credential-holding relay for the Gemini API
//!
//! This library provides the core functionality for the proxy server. It
//! keeps the Gemini API key on the server and relays one JSON
//! request/response pair per call.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::proxy::{GeminiClient, GenerativeApi};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Upstream API receiving the forwarded requests
    pub upstream: Arc<dyn GenerativeApi>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Connection pooling only. The upstream call runs until the
        // transport finishes or fails.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .build()?;

        let upstream: Arc<dyn GenerativeApi> = Arc::new(GeminiClient::new(http_client, &config)?);

        Ok(Self::with_upstream(config, upstream))
    }

    /// Create an application state around an existing upstream client
    pub fn with_upstream(config: Config, upstream: Arc<dyn GenerativeApi>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            upstream,
        }
    }

    /// Create a new application state for testing against a mocked upstream
    ///
    /// `upstream_url` is typically a wiremock server URI plus the
    /// generateContent path.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(upstream_url: &str, api_key: Option<&str>) -> Result<Self> {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Let OS assign port
            gemini_api_url: upstream_url.to_string(),
            gemini_api_key: api_key.map(str::to_string),
            json_logs: false,
        };

        Self::new(config)
    }
}
