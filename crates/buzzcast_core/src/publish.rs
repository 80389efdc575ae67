//! Per-platform publish outcomes.

use serde::{Deserialize, Serialize};

/// Classified reason a platform did not publish.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PublishFailure {
    /// Text violated the platform's limits.
    Validation,
    /// Credentials were missing or rejected.
    Credentials,
    /// Platform signalled a rate limit.
    RateLimited,
    /// Platform rejected the post as a duplicate.
    Duplicate,
    /// Any other API error.
    Api,
    /// Adapter returned an error or panicked.
    Unexpected,
}

impl PublishFailure {
    /// Short human-readable summary used as the result's error text.
    pub fn summary(&self) -> &'static str {
        match self {
            PublishFailure::Validation => "Validation failed",
            PublishFailure::Credentials => "Credential check failed",
            PublishFailure::RateLimited => "Rate limited",
            PublishFailure::Duplicate => "Duplicate post",
            PublishFailure::Api => "API error",
            PublishFailure::Unexpected => "Unexpected error",
        }
    }
}

/// Options for a single platform publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOptions {
    /// Validate and return without any network effect.
    #[serde(default)]
    pub validate_only: bool,
}

/// Outcome of one publish attempt on one platform.
///
/// # Examples
///
/// ```
/// use buzzcast_core::{PublishFailure, PublishResult};
///
/// let ok = PublishResult::dry_run("dry-run-x-1");
/// assert!(ok.success && ok.dry_run);
///
/// let limited = PublishResult::failed(PublishFailure::RateLimited, "Too Many Requests")
///     .with_retry_after(Some(900));
/// assert!(!limited.success);
/// assert_eq!(limited.retry_after, Some(900));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    /// Whether the post went out (or would have, in dry run).
    pub success: bool,
    /// No network call was made.
    pub dry_run: bool,
    /// Only validation ran.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub validated_only: bool,
    /// Platform post id.
    pub id: Option<String>,
    /// Public URL of the post.
    pub url: Option<String>,
    /// Error text on failure.
    pub error: Option<String>,
    /// Failure class on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<PublishFailure>,
    /// Seconds until a rate limit resets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Vendor details or validation output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PublishResult {
    /// A live post that went out.
    pub fn published(id: impl Into<String>, url: Option<String>) -> Self {
        Self {
            success: true,
            dry_run: false,
            validated_only: false,
            id: Some(id.into()),
            url,
            error: None,
            failure: None,
            retry_after: None,
            details: None,
        }
    }

    /// A synthetic success that never touched the network.
    pub fn dry_run(id: impl Into<String>) -> Self {
        Self {
            dry_run: true,
            url: None,
            ..Self::published(id, None)
        }
    }

    /// Validation passed and nothing else was attempted.
    pub fn validated(dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            validated_only: true,
            id: None,
            url: None,
            error: None,
            failure: None,
            retry_after: None,
            details: None,
        }
    }

    /// A classified failure.
    pub fn failed(failure: PublishFailure, error: impl Into<String>) -> Self {
        Self {
            success: false,
            dry_run: false,
            validated_only: false,
            id: None,
            url: None,
            error: Some(error.into()),
            failure: Some(failure),
            retry_after: None,
            details: None,
        }
    }

    /// Attach vendor details.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a retry-after hint.
    pub fn with_retry_after(mut self, retry_after: Option<u64>) -> Self {
        self.retry_after = retry_after;
        self
    }

    /// Mark the result as produced in dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a cheap authenticated read against a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCheck {
    /// Credentials were accepted.
    pub success: bool,
    /// No network call was made.
    pub dry_run: bool,
    /// Account name or id reported by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Why the check failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CredentialCheck {
    /// Credentials accepted for `account`.
    pub fn ok(account: impl Into<String>) -> Self {
        Self {
            success: true,
            dry_run: false,
            account: Some(account.into()),
            error: None,
        }
    }

    /// Synthetic success in dry-run mode.
    pub fn dry_run() -> Self {
        Self {
            success: true,
            dry_run: true,
            account: None,
            error: None,
        }
    }

    /// Credentials rejected or unreachable.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            dry_run: false,
            account: None,
            error: Some(error.into()),
        }
    }
}
