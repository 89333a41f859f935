//! Mock Gemini API for testing
//!
//! Provides wiremock-based mocks for the `generateContent` endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::gemini::{MockGemini, GeminiTestData};
//!
//! #[tokio::test]
//! async fn test_with_gemini_mock() {
//!     let mock_gemini = MockGemini::start().await;
//!     mock_gemini.mock_success("test-key", GeminiTestData::simple_response()).await;
//!
//!     // Use mock_gemini.endpoint() as GEMINI_API_URL
//! }
//! ```

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Model path served by the mock
pub const GENERATE_CONTENT_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// Mock Gemini server wrapper
pub struct MockGemini {
    server: MockServer,
}

impl MockGemini {
    /// Start a new mock Gemini server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Full generateContent URL to use as `GEMINI_API_URL`
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), GENERATE_CONTENT_PATH)
    }

    /// Mock a JSON reply for requests carrying `api_key`
    pub async fn mock_json(&self, api_key: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .and(query_param("key", api_key))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful generateContent reply
    pub async fn mock_success(&self, api_key: &str, body: Value) {
        self.mock_json(api_key, 200, body).await;
    }

    /// Mock a reply with an exact raw body
    pub async fn mock_raw(&self, status: u16, body: &str, content_type: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_raw(body.as_bytes().to_vec(), content_type),
            )
            .mount(&self.server)
            .await;
    }

    /// Number of requests the upstream received
    pub async fn received_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// Parsed JSON body of every received request
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

/// Canned payloads
pub struct GeminiTestData;

impl GeminiTestData {
    /// A client request asking the model to read a ticker from text
    pub fn simple_request() -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": "Which stock is this? 2330 台積電" }]
            }],
            "generationConfig": { "responseMimeType": "application/json" }
        })
    }

    /// A successful generateContent response
    pub fn simple_response() -> Value {
        json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "{\"symbol\":\"2330\",\"name\":\"台積電\"}" }]
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 9,
                "totalTokenCount": 21
            },
            "modelVersion": "gemini-test"
        })
    }

    /// The upstream's rate limit error
    pub fn rate_limited() -> Value {
        json!({ "error": { "message": "rate limited" } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let mock = MockGemini::start().await;
        assert!(mock.endpoint().ends_with(GENERATE_CONTENT_PATH));
        assert_eq!(mock.received_count().await, 0);
    }

    #[tokio::test]
    async fn test_mock_success_matches_key() {
        let mock = MockGemini::start().await;
        mock.mock_success("k", GeminiTestData::simple_response()).await;

        let response = reqwest::Client::new()
            .post(format!("{}?key=k", mock.endpoint()))
            .json(&GeminiTestData::simple_request())
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(mock.received_count().await, 1);
        assert_eq!(mock.received_bodies().await, vec![GeminiTestData::simple_request()]);
    }
}
