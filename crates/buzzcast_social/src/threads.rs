//! Threads poster.
//!
//! Publishing is a two-step Graph API flow: create a TEXT media container,
//! then publish it by its creation id. Every outbound call goes through the
//! poster's pacer.

use crate::outcome::{classify, error_from_response, preflight, transport_error};
use crate::{ThreadsCredentials, ThreadsSettings};
use async_trait::async_trait;
use buzzcast_core::{CredentialCheck, PlatformId, PostOptions, PublishResult};
use buzzcast_error::{PosterError, PosterErrorKind, PosterResult};
use buzzcast_interface::Poster;
use buzzcast_rate_limit::RequestPacer;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Deserialize)]
struct IdResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ThreadsUser {
    id: String,
    #[serde(default)]
    username: Option<String>,
}

/// Posts to Threads through the Graph API.
#[derive(Debug)]
pub struct ThreadsPoster {
    platform: PlatformId,
    client: Client,
    base_url: String,
    token_url: String,
    credentials: Option<ThreadsCredentials>,
    dry_run: bool,
    pacer: RequestPacer,
    app_token: OnceCell<String>,
}

impl ThreadsPoster {
    /// Maximum post length on Threads.
    pub const MAX_LENGTH: usize = 500;

    /// Create a Threads poster.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` in live mode unless either an access
    /// token and user id, or an app id, app secret and user id are set.
    #[instrument(skip_all, fields(dry_run = dry_run))]
    pub fn new(settings: &ThreadsSettings, dry_run: bool) -> PosterResult<Self> {
        let credentials = settings.credentials();

        if credentials.is_none() {
            if !dry_run {
                return Err(PosterError::new(PosterErrorKind::MissingCredentials {
                    platform: "threads".to_string(),
                    detail: "set THREADS_ACCESS_TOKEN + THREADS_USER_ID, or THREADS_APP_ID + THREADS_APP_SECRET + THREADS_USER_ID".to_string(),
                }));
            }
            warn!("Threads credentials missing, running in dry-run mode");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            platform: PlatformId::new("threads"),
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token_url: settings.token_url.clone(),
            credentials,
            dry_run,
            pacer: RequestPacer::from_config(&settings.pacing),
            app_token: OnceCell::new(),
        })
    }

    fn credentials(&self) -> PosterResult<&ThreadsCredentials> {
        self.credentials.as_ref().ok_or_else(|| {
            PosterError::new(PosterErrorKind::MissingCredentials {
                platform: self.platform.to_string(),
                detail: "no credentials".to_string(),
            })
        })
    }

    /// The token for API calls; app credentials are exchanged once.
    async fn access_token(&self) -> PosterResult<String> {
        match self.credentials()? {
            ThreadsCredentials::AccessToken { token, .. } => Ok(token.clone()),
            ThreadsCredentials::App {
                app_id, app_secret, ..
            } => self
                .app_token
                .get_or_try_init(|| self.exchange_app_token(app_id, app_secret))
                .await
                .cloned(),
        }
    }

    async fn exchange_app_token(&self, app_id: &str, app_secret: &str) -> PosterResult<String> {
        debug!("Exchanging Threads app credentials for an access token");
        self.pacer.wait().await;

        let response = self
            .client
            .get(&self.token_url)
            .query(&[
                ("client_id", app_id),
                ("client_secret", app_secret),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            return Err(match err.kind() {
                PosterErrorKind::Api { message, .. } => {
                    PosterError::new(PosterErrorKind::Authentication(message.clone()))
                }
                _ => err,
            });
        }

        let token: TokenResponse = parse_json(response).await?;
        token.access_token.ok_or_else(|| {
            PosterError::new(PosterErrorKind::InvalidResponse(
                "no access_token in token response".to_string(),
            ))
        })
    }

    async fn post_form(&self, path: &str, params: &[(&str, &str)]) -> PosterResult<String> {
        self.pacer.wait().await;

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .form(params)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: IdResponse = parse_json(response).await?;
        body.id.ok_or_else(|| {
            PosterError::new(PosterErrorKind::InvalidResponse(format!("no id returned from {path}")))
        })
    }

    async fn publish_live(&self, text: &str) -> PosterResult<(String, String)> {
        let token = self.access_token().await?;
        let user_id = self.credentials()?.user_id().to_string();

        let container = self
            .post_form(
                &format!("{user_id}/threads"),
                &[("media_type", "TEXT"), ("text", text), ("access_token", token.as_str())],
            )
            .await?;
        debug!(container = %container, "Created Threads media container");

        let id = self
            .post_form(
                &format!("{user_id}/threads_publish"),
                &[("creation_id", container.as_str()), ("access_token", token.as_str())],
            )
            .await?;

        Ok((id, container))
    }

    async fn user(&self) -> PosterResult<ThreadsUser> {
        let token = self.access_token().await?;
        let user_id = self.credentials()?.user_id().to_string();
        self.pacer.wait().await;

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, user_id))
            .query(&[("fields", "id,username"), ("access_token", token.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        parse_json(response).await
    }
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> PosterResult<T> {
    response
        .json()
        .await
        .map_err(|e| PosterError::new(PosterErrorKind::InvalidResponse(e.to_string())))
}

#[async_trait]
impl Poster for ThreadsPoster {
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

        match self.user().await {
            Ok(user) => {
                let account = user.username.unwrap_or(user.id);
                info!(account = %account, "Threads credentials accepted");
                CredentialCheck::ok(account)
            }
            Err(e) => {
                warn!(error = %e, "Threads credential check failed");
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

        match self.publish_live(text).await {
            Ok((id, container)) => {
                info!(id = %id, "Published to Threads");
                Ok(PublishResult::published(id, None)
                    .with_details(serde_json::json!({ "containerId": container })))
            }
            Err(e) => {
                warn!(error = %e, "Threads publish failed");
                Ok(classify(&e))
            }
        }
    }
}
