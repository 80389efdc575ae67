//! Gemini REST client.

mod client;
mod config;
mod dto;

pub use client::GeminiClient;
pub use config::{DEFAULT_GEMINI_BASE_URL, GeminiConfig, resolve_model_name};
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse,
};
