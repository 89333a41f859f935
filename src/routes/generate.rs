//! Content generation proxy endpoint
//!
//! Accepts any method so the POST-only rule answers with a JSON error body
//! instead of axum's bare 405.

use std::sync::Arc;

use axum::{
    extract::{rejection::BytesRejection, OriginalUri, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::Value;
use tracing::Instrument;

use crate::{
    error::{ProxyError, ProxyResult},
    proxy::RequestContext,
    AppState,
};

/// Proxy handler for content generation requests
///
/// This handler:
/// 1. Rejects anything but POST with 405
/// 2. Fails with 500 when no API key is configured, before any network call
/// 3. Forwards the JSON body to the upstream with the key attached
/// 4. Relays the upstream body verbatim (its status on error, 200 on success)
///
/// The body rejection is taken as a value so an oversized body on a non-POST
/// request still gets the 405.
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult<Response> {
    if method != Method::POST {
        return Err(ProxyError::MethodNotAllowed);
    }

    let ctx = RequestContext::new(state.upstream.name(), uri.path());
    let span = ctx.create_span();

    forward(&state, &ctx, body).instrument(span).await
}

async fn forward(
    state: &AppState,
    ctx: &RequestContext,
    body: Result<Bytes, BytesRejection>,
) -> ProxyResult<Response> {
    let Some(api_key) = state.config.api_key() else {
        ctx.log_missing_credential();
        return Err(ProxyError::MissingCredential);
    };

    let body = body.map_err(|e| {
        ctx.log_transport_error(&e.body_text());
        ProxyError::RequestBody(e)
    })?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        ctx.log_transport_error(&e.to_string());
        ProxyError::Decode(e)
    })?;

    ctx.log_request_start(body.len());

    let reply = state
        .upstream
        .generate_content(api_key, &payload)
        .await
        .map_err(|e| {
            ctx.log_transport_error(&e.to_string());
            e
        })?;

    ctx.log_upstream_response(reply.status.as_u16(), reply.body.len());

    if reply.is_error() {
        ctx.log_upstream_error(reply.status.as_u16(), &String::from_utf8_lossy(&reply.body));
        return Err(ProxyError::Upstream(reply));
    }

    ctx.log_request_complete(StatusCode::OK.as_u16());

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response())
}
