//! Proxy module
//!
//! Handles request forwarding to the upstream generative-AI API.

pub mod gemini;
pub mod headers;
pub mod logging;

pub use gemini::{GeminiClient, GenerativeApi, UpstreamReply};
pub use logging::RequestContext;
