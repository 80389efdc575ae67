//! Rate-limit signals in HTTP responses.
//!
//! Platforms disagree on how they announce a reset:
//! - `retry-after`: seconds to wait
//! - `x-rate-limit-reset` (X) and `x-ratelimit-reset`: Unix timestamp

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// Whether the status is the standard rate-limit status.
pub fn is_rate_limited(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
}

/// Seconds until the platform will accept requests again, if announced.
///
/// `now_epoch_secs` is the current Unix time, used to turn reset timestamps
/// into a delay. A reset in the past yields zero.
pub fn retry_after_secs(headers: &HeaderMap, now_epoch_secs: u64) -> Option<u64> {
    if let Some(secs) = parse_header_u64(headers, "retry-after") {
        return Some(secs);
    }

    ["x-rate-limit-reset", "x-ratelimit-reset"]
        .iter()
        .find_map(|key| parse_header_u64(headers, key))
        .map(|reset| reset.saturating_sub(now_epoch_secs))
}

fn parse_header_u64(headers: &HeaderMap, key: &str) -> Option<u64> {
    headers.get(key)?.to_str().ok()?.trim().parse().ok()
}
