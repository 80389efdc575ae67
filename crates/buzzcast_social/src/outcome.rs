//! Shared publish flow steps and failure classification.

use buzzcast_core::{PlatformId, PostOptions, PublishFailure, PublishResult};
use buzzcast_error::{PosterError, PosterErrorKind};
use buzzcast_interface::Poster;
use buzzcast_rate_limit::{is_rate_limited, retry_after_secs};
use chrono::Utc;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Synthetic id for a dry-run post, e.g. `dry-run-x-1718000000000`.
pub fn dry_run_id(platform: &PlatformId) -> String {
    format!("dry-run-{}-{}", platform, Utc::now().timestamp_millis())
}

/// Run the steps every adapter shares before touching the network.
///
/// Returns the final result when the flow ends early: invalid text,
/// `validate_only`, or dry run. `None` means the live call should proceed.
pub fn preflight<P: Poster + ?Sized>(
    poster: &P,
    text: &str,
    options: &PostOptions,
) -> Option<PublishResult> {
    let platform = poster.platform();
    let validation = poster.validate_post(text);

    if !validation.is_valid {
        warn!(platform = %platform, errors = ?validation.errors, "Post validation failed");
        return Some(
            PublishResult::failed(PublishFailure::Validation, "Validation failed")
                .with_dry_run(poster.is_dry_run())
                .with_details(json!(validation.errors)),
        );
    }

    debug!(platform = %platform, length = validation.length, "Post validation passed");

    if options.validate_only {
        return Some(PublishResult::validated(poster.is_dry_run()));
    }

    if poster.is_dry_run() {
        info!(platform = %platform, length = validation.length, text, "Dry run, not publishing");
        return Some(PublishResult::dry_run(dry_run_id(platform)));
    }

    None
}

/// Turn a poster error into a failed result.
pub fn classify(err: &PosterError) -> PublishResult {
    let message = err.kind().to_string();
    let result = match err.kind() {
        PosterErrorKind::MissingCredentials { .. } | PosterErrorKind::Authentication(_) => {
            PublishResult::failed(PublishFailure::Credentials, PublishFailure::Credentials.summary())
        }
        PosterErrorKind::RateLimited { retry_after, .. } => {
            PublishResult::failed(PublishFailure::RateLimited, PublishFailure::RateLimited.summary())
                .with_retry_after(*retry_after)
        }
        PosterErrorKind::Duplicate(_) => {
            PublishResult::failed(PublishFailure::Duplicate, PublishFailure::Duplicate.summary())
        }
        PosterErrorKind::Api { status, .. } => {
            return PublishResult::failed(PublishFailure::Api, PublishFailure::Api.summary())
                .with_details(json!({ "status": status, "message": message }));
        }
        PosterErrorKind::Http(_) | PosterErrorKind::InvalidResponse(_) => {
            PublishResult::failed(PublishFailure::Api, PublishFailure::Api.summary())
        }
    };
    result.with_details(json!({ "message": message }))
}

/// Best-effort human message from a vendor error body.
///
/// Understands X problem documents (`detail`, `errors[0].message`, `title`)
/// and Graph API errors (`error.message`). Anything else is returned trimmed.
pub fn vendor_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    ["/detail", "/error/message", "/errors/0/message", "/title", "/error"]
        .iter()
        .find_map(|pointer| value.pointer(pointer).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}

fn is_duplicate(body: &str) -> bool {
    let lower = body.to_lowercase();
    if lower.contains("duplicate") || lower.contains("already posted") {
        return true;
    }
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("errors").and_then(Value::as_array).cloned())
        .is_some_and(|errors| {
            errors
                .iter()
                .any(|e| e.get("code").and_then(Value::as_i64) == Some(187))
        })
}

/// Classify a non-success response.
///
/// Order: rate limit, duplicate, authentication (401), then generic API error.
pub fn error_from_status(status: StatusCode, headers: &HeaderMap, body: &str) -> PosterError {
    let message = vendor_message(body);

    let kind = if is_rate_limited(status) {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
        PosterErrorKind::RateLimited {
            retry_after: retry_after_secs(headers, now),
            message,
        }
    } else if is_duplicate(body) {
        PosterErrorKind::Duplicate(message)
    } else if status == StatusCode::UNAUTHORIZED {
        PosterErrorKind::Authentication(message)
    } else {
        PosterErrorKind::Api {
            status: status.as_u16(),
            message,
        }
    };

    PosterError::new(kind)
}

/// Read a failed response into a classified error.
pub(crate) async fn error_from_response(response: reqwest::Response) -> PosterError {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await.unwrap_or_default();
    error_from_status(status, &headers, &body)
}

pub(crate) fn transport_error(err: reqwest::Error) -> PosterError {
    PosterError::new(PosterErrorKind::Http(err.to_string()))
}
