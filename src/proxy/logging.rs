//! Request logging utilities for upstream proxying
//!
//! Provides structured logging with short correlation IDs so the lines
//! belonging to one proxied call can be grouped. Nothing here ever logs
//! the API key.

use std::time::Instant;
use tracing::{error, info, Span};
use uuid::Uuid;

/// Context for tracking a request through the proxy
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Upstream provider handling this request
    pub provider: String,
    /// Inbound path
    pub endpoint: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str, endpoint: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    pub fn log_request_start(&self, body_size: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            body_size = %body_size,
            "Request started"
        );
    }

    pub fn log_missing_credential(&self) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            "GEMINI_API_KEY environment variable is not set"
        );
    }

    /// Log response received from upstream
    pub fn log_upstream_response(&self, status: u16, body_size: usize) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            status = %status,
            body_size = %body_size,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Log an error reported by the upstream, with its body
    pub fn log_upstream_error(&self, status: u16, body: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            status = %status,
            body = %body,
            elapsed_ms = %self.elapsed_ms(),
            "Upstream API returned an error"
        );
    }

    /// Log a failure to reach the upstream or decode its reply
    pub fn log_transport_error(&self, error: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Proxy request failed"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self, status: u16) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            status = %status,
            elapsed_ms = %self.elapsed_ms(),
            "Request completed successfully"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "proxy_request",
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
        )
    }
}
