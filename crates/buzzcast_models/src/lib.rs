//! Text generation backends for buzzcast.
//!
//! Currently a single backend: the Gemini `generateContent` REST API,
//! exposed as a [`TextGenerator`](buzzcast_interface::TextGenerator).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    DEFAULT_GEMINI_BASE_URL, GeminiCandidate, GeminiClient, GeminiConfig, GeminiContent,
    GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse, resolve_model_name,
};
