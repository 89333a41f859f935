//! Integration tests for the Gemini proxy
//!
//! These tests drive the real router over HTTP against a wiremock upstream.
