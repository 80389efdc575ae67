//! Platform settings and resolved credentials.

use buzzcast_rate_limit::PacingConfig;
use serde::{Deserialize, Serialize};

/// Default X API base URL.
pub const DEFAULT_X_BASE_URL: &str = "https://api.x.com";
/// Default Threads Graph API base URL.
pub const DEFAULT_THREADS_BASE_URL: &str = "https://graph.threads.net/v1.0";
/// Default endpoint for exchanging app credentials for a token.
pub const DEFAULT_THREADS_TOKEN_URL: &str = "https://graph.facebook.com/oauth/access_token";

/// Settings for every built-in platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterSettings {
    /// X settings.
    #[serde(default)]
    pub x: XSettings,
    /// Threads settings.
    #[serde(default)]
    pub threads: ThreadsSettings,
}

/// X settings as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XSettings {
    /// OAuth 2.0 user access token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Account handle, used for post URLs.
    #[serde(default)]
    pub username: Option<String>,
    /// API base URL.
    #[serde(default = "default_x_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Outbound request pacing.
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// Threads settings as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadsSettings {
    /// Long-lived user access token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Threads user id.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Meta app id, used when no access token is set.
    #[serde(default)]
    pub app_id: Option<String>,
    /// Meta app secret, used when no access token is set.
    #[serde(default)]
    pub app_secret: Option<String>,
    /// API base URL.
    #[serde(default = "default_threads_base_url")]
    pub base_url: String,
    /// Token exchange endpoint.
    #[serde(default = "default_threads_token_url")]
    pub token_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Outbound request pacing.
    #[serde(default)]
    pub pacing: PacingConfig,
}

fn default_x_base_url() -> String {
    DEFAULT_X_BASE_URL.to_string()
}

fn default_threads_base_url() -> String {
    DEFAULT_THREADS_BASE_URL.to_string()
}

fn default_threads_token_url() -> String {
    DEFAULT_THREADS_TOKEN_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for XSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            username: None,
            base_url: default_x_base_url(),
            timeout_secs: default_timeout_secs(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Default for ThreadsSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            user_id: None,
            app_id: None,
            app_secret: None,
            base_url: default_threads_base_url(),
            token_url: default_threads_token_url(),
            timeout_secs: default_timeout_secs(),
            pacing: PacingConfig::default(),
        }
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A complete X credential set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XCredentials {
    /// Bearer token.
    pub access_token: String,
}

impl XSettings {
    /// Resolve the credential set, if complete.
    pub fn credentials(&self) -> Option<XCredentials> {
        present(&self.access_token).map(|access_token| XCredentials { access_token })
    }
}

/// A complete Threads credential set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadsCredentials {
    /// A user token issued out of band.
    AccessToken {
        /// Access token.
        token: String,
        /// Threads user id.
        user_id: String,
    },
    /// App credentials exchanged for a token on first use.
    App {
        /// Meta app id.
        app_id: String,
        /// Meta app secret.
        app_secret: String,
        /// Threads user id.
        user_id: String,
    },
}

impl ThreadsCredentials {
    /// The Threads user id.
    pub fn user_id(&self) -> &str {
        match self {
            Self::AccessToken { user_id, .. } | Self::App { user_id, .. } => user_id,
        }
    }
}

impl ThreadsSettings {
    /// Resolve the credential set, preferring a direct access token.
    pub fn credentials(&self) -> Option<ThreadsCredentials> {
        let user_id = present(&self.user_id)?;
        if let Some(token) = present(&self.access_token) {
            return Some(ThreadsCredentials::AccessToken { token, user_id });
        }
        match (present(&self.app_id), present(&self.app_secret)) {
            (Some(app_id), Some(app_secret)) => Some(ThreadsCredentials::App {
                app_id,
                app_secret,
                user_id,
            }),
            _ => None,
        }
    }
}
