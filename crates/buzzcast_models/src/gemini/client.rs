//! Gemini `generateContent` client.

use crate::{GeminiConfig, GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use buzzcast_error::{GenerationError, GenerationErrorKind, GenerationResult};
use buzzcast_interface::TextGenerator;
use buzzcast_rate_limit::RequestPacer;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Gemini REST client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    config: GeminiConfig,
    pacer: RequestPacer,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or the HTTP client cannot be
    /// built.
    #[instrument(skip_all)]
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> GenerationResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::MissingApiKey));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        let model = config.model_name();
        debug!(model = %model, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model,
            config,
            pacer: RequestPacer::unpaced(),
        })
    }

    /// Pace outbound requests with `pacer`.
    pub fn with_pacer(mut self, pacer: RequestPacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Model used for requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text, retrying transient failures.
    ///
    /// # Errors
    ///
    /// Returns the last error once retries are exhausted, or the first
    /// permanent error.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn generate_content(&self, prompt: &str) -> GenerationResult<String> {
        let request = GeminiRequest::text(
            prompt,
            self.config.temperature,
            self.config.max_output_tokens,
        );
        self.pacer
            .execute(self.config.max_retries, || self.send(&request))
            .await
    }

    async fn send(&self, request: &GeminiRequest) -> GenerationResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!(url = %url, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string())))?;

        body.first_text()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Option<String> {
        match self.generate_content(prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "Gemini generation failed");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
