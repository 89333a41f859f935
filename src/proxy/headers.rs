//! Header and URL utilities for upstream requests
//!
//! The credential travels as the `key` query parameter, so outbound URLs
//! must be redacted before they reach a log line.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;

/// Query parameter carrying the API key
pub const CREDENTIAL_QUERY_PARAM: &str = "key";

const REDACTED: &str = "REDACTED";

/// Build default headers for upstream requests
///
/// Client headers are not forwarded. The upstream only ever sees the JSON
/// content type and the server-held key in the query string.
pub fn build_default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Append the credential to the endpoint as `?key=...`
pub fn with_credential(endpoint: &Url, api_key: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().append_pair(CREDENTIAL_QUERY_PARAM, api_key);
    url
}

/// Render a URL for logging with the credential value masked
pub fn redact_credential(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == CREDENTIAL_QUERY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == CREDENTIAL_QUERY_PARAM {
                REDACTED.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
