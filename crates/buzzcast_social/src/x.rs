//! X (formerly Twitter) poster.

use crate::outcome::{classify, error_from_response, preflight, transport_error};
use crate::{XCredentials, XSettings};
use async_trait::async_trait;
use buzzcast_core::{CredentialCheck, PlatformId, PostOptions, PublishResult};
use buzzcast_error::{PosterError, PosterErrorKind, PosterResult};
use buzzcast_interface::Poster;
use buzzcast_rate_limit::RequestPacer;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument, warn};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Me {
    id: String,
    #[serde(default)]
    username: Option<String>,
}

/// Posts to X through the v2 API with an OAuth 2.0 user token.
#[derive(Debug, Clone)]
pub struct XPoster {
    platform: PlatformId,
    client: Client,
    base_url: String,
    username: Option<String>,
    credentials: Option<XCredentials>,
    dry_run: bool,
    pacer: RequestPacer,
}

impl XPoster {
    /// Maximum post length on X.
    pub const MAX_LENGTH: usize = 280;

    /// Create an X poster.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` in live mode without an access token.
    #[instrument(skip_all, fields(dry_run = dry_run))]
    pub fn new(settings: &XSettings, dry_run: bool) -> PosterResult<Self> {
        let credentials = settings.credentials();

        if credentials.is_none() {
            if !dry_run {
                return Err(PosterError::new(PosterErrorKind::MissingCredentials {
                    platform: "x".to_string(),
                    detail: "set X_ACCESS_TOKEN or platforms.x.access_token".to_string(),
                }));
            }
            warn!("X credentials missing, running in dry-run mode");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            platform: PlatformId::new("x"),
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            username: settings.username.clone().filter(|u| !u.trim().is_empty()),
            credentials,
            dry_run,
            pacer: RequestPacer::from_config(&settings.pacing),
        })
    }

    fn credentials(&self) -> PosterResult<&XCredentials> {
        self.credentials.as_ref().ok_or_else(|| {
            PosterError::new(PosterErrorKind::MissingCredentials {
                platform: self.platform.to_string(),
                detail: "no access token".to_string(),
            })
        })
    }

    fn post_url(&self, id: &str) -> String {
        let handle = self.username.as_deref().unwrap_or("i");
        format!("https://x.com/{}/status/{}", handle.trim_start_matches('@'), id)
    }

    async fn create_tweet(&self, text: &str) -> PosterResult<String> {
        let credentials = self.credentials()?;
        self.pacer.wait().await;

        let response = self
            .client
            .post(format!("{}/2/tweets", self.base_url))
            .bearer_auth(&credentials.access_token)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let created: Envelope<CreatedTweet> = response
            .json()
            .await
            .map_err(|e| PosterError::new(PosterErrorKind::InvalidResponse(e.to_string())))?;
        Ok(created.data.id)
    }

    async fn me(&self) -> PosterResult<Me> {
        let credentials = self.credentials()?;
        self.pacer.wait().await;

        let response = self
            .client
            .get(format!("{}/2/users/me", self.base_url))
            .bearer_auth(&credentials.access_token)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let me: Envelope<Me> = response
            .json()
            .await
            .map_err(|e| PosterError::new(PosterErrorKind::InvalidResponse(e.to_string())))?;
        Ok(me.data)
    }
}

#[async_trait]
impl Poster for XPoster {
    fn platform(&self) -> &PlatformId {
        &self.platform
    }

    fn max_length(&self) -> usize {
        Self::MAX_LENGTH
    }

    fn is_dry_run(&self) -> bool {
        self.dry_run || self.credentials.is_none()
    }

    #[instrument(skip(self), fields(platform = %self.platform))]
    async fn test_credentials(&self) -> CredentialCheck {
        if self.is_dry_run() {
            return CredentialCheck::dry_run();
        }

        match self.me().await {
            Ok(me) => {
                let account = me.username.unwrap_or(me.id);
                info!(account = %account, "X credentials accepted");
                CredentialCheck::ok(account)
            }
            Err(e) => {
                warn!(error = %e, "X credential check failed");
                CredentialCheck::failed(e.kind().to_string())
            }
        }
    }

    #[instrument(skip(self, text), fields(platform = %self.platform, length = text.chars().count()))]
    async fn publish_post(
        &self,
        text: &str,
        options: &PostOptions,
    ) -> PosterResult<PublishResult> {
        if let Some(result) = preflight(self, text, options) {
            return Ok(result);
        }

        match self.create_tweet(text).await {
            Ok(id) => {
                let url = self.post_url(&id);
                info!(id = %id, url = %url, "Published to X");
                Ok(PublishResult::published(id, Some(url)))
            }
            Err(e) => {
                warn!(error = %e, "X publish failed");
                Ok(classify(&e))
            }
        }
    }
}
