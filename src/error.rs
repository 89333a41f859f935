//! Error types for the proxy
//!
//! Local failures answer with `{"error":{"message":...}}`. Upstream failures
//! answer with whatever the upstream sent, unchanged.

use axum::{
    extract::rejection::BytesRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::proxy::UpstreamReply;

/// "POST requests only"
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "僅允許 POST 請求";
/// "Server misconfigured: API key not set"
pub const MISSING_CREDENTIAL_MESSAGE: &str = "伺服器設定錯誤：API 金鑰未設定";
/// "Internal server error"
pub const INTERNAL_ERROR_MESSAGE: &str = "伺服器內部錯誤";

/// Proxy-level errors
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("GEMINI_API_KEY is not configured")]
    MissingCredential,

    #[error("Upstream returned an error (status {})", .0.status)]
    Upstream(UpstreamReply),

    #[error("HTTP client error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read request body: {}", .0.body_text())]
    RequestBody(BytesRejection),

    /// Inbound or upstream body is not JSON
    #[error("JSON decode error: {0}")]
    Decode(serde_json::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProxyError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
            }
            ProxyError::MissingCredential => {
                (StatusCode::INTERNAL_SERVER_ERROR, MISSING_CREDENTIAL_MESSAGE)
            }
            ProxyError::Upstream(reply) => {
                return (
                    reply.client_status(),
                    [(header::CONTENT_TYPE, "application/json")],
                    reply.body,
                )
                    .into_response();
            }
            ProxyError::Transport(_) | ProxyError::RequestBody(_) | ProxyError::Decode(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type alias for convenience
pub type ProxyResult<T> = Result<T, ProxyError>;
