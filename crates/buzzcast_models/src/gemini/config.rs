//! Gemini configuration.

use serde::{Deserialize, Serialize};

/// Public Gemini API endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for [`GeminiClient`](crate::GeminiClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Explicit model name; overrides the environment default.
    #[serde(default)]
    pub model: Option<String>,
    /// Deployment environment used to pick a default model.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output token cap.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries for transient failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    512
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> usize {
    2
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: None,
            environment: default_environment(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl GeminiConfig {
    /// The model this configuration resolves to.
    pub fn model_name(&self) -> String {
        resolve_model_name(self.model.as_deref(), &self.environment)
    }
}

/// Pick the model: an explicit non-blank name wins, then the environment
/// default (`gemini-2.5-flash` in production, `gemini-2.5-flash-lite`
/// elsewhere).
///
/// # Examples
///
/// ```
/// use buzzcast_models::resolve_model_name;
///
/// assert_eq!(resolve_model_name(None, "production"), "gemini-2.5-flash");
/// assert_eq!(resolve_model_name(None, "development"), "gemini-2.5-flash-lite");
/// assert_eq!(resolve_model_name(Some("custom-model"), "production"), "custom-model");
/// ```
pub fn resolve_model_name(explicit: Option<&str>, environment: &str) -> String {
    match explicit.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None if environment.trim().eq_ignore_ascii_case("production") => {
            "gemini-2.5-flash".to_string()
        }
        None => "gemini-2.5-flash-lite".to_string(),
    }
}
