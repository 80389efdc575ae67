//! Gemini `generateContent` request and response bodies.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A text part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Part text.
    #[serde(default)]
    text: Option<String>,
}

/// A content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// Producer role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts.
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// Sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Sampling temperature.
    temperature: f32,
    /// Output token cap.
    max_output_tokens: u32,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation; a single user turn here.
    contents: Vec<GeminiContent>,
    /// Sampling settings.
    generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    /// A single-turn text request.
    pub fn text(prompt: &str, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature,
                max_output_tokens,
            },
        }
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content; absent when blocked.
    #[serde(default)]
    content: Option<GeminiContent>,
    /// Why generation stopped.
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiResponse {
    /// Candidates, best first.
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Trimmed text of the first candidate's parts, if any is non-blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use buzzcast_models::GeminiResponse;
    ///
    /// let body = r#"{"candidates":[{"content":{"parts":[{"text":" 円安。 "}]}}]}"#;
    /// let response: GeminiResponse = serde_json::from_str(body).unwrap();
    /// assert_eq!(response.first_text().as_deref(), Some("円安。"));
    /// ```
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}
