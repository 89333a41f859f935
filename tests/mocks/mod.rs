//! Mock infrastructure for the upstream Gemini API

pub mod gemini;

pub use gemini::*;
