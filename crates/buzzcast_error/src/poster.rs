//! Social platform poster errors.

/// Poster error conditions.
///
/// Most of these are turned into failed publish results by the adapter that
/// raised them; only construction errors travel further.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PosterErrorKind {
    /// Live mode requested without a complete credential set
    #[display("Missing credentials for {}: {}", platform, detail)]
    MissingCredentials {
        /// Platform identifier
        platform: String,
        /// Which settings were absent
        detail: String,
    },
    /// Platform rejected the credentials
    #[display("Authentication failed: {}", _0)]
    Authentication(String),
    /// Platform signalled a rate limit
    #[display("Rate limited (retry after {:?}s): {}", retry_after, message)]
    RateLimited {
        /// Seconds until the limit resets, when the platform says
        retry_after: Option<u64>,
        /// Vendor message
        message: String,
    },
    /// Platform rejected the content as a duplicate
    #[display("Duplicate content: {}", _0)]
    Duplicate(String),
    /// Unclassified API error
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Vendor message or body
        message: String,
    },
    /// Transport failure
    #[display("HTTP transport error: {}", _0)]
    Http(String),
    /// Response body could not be interpreted
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
}

/// Poster error with location tracking.
///
/// # Examples
///
/// ```
/// use buzzcast_error::{PosterError, PosterErrorKind};
///
/// let err = PosterError::new(PosterErrorKind::Duplicate("Status is a duplicate".into()));
/// assert!(format!("{}", err).contains("Duplicate content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Poster Error: {} at line {} in {}", kind, line, file)]
pub struct PosterError {
    kind: PosterErrorKind,
    line: u32,
    file: &'static str,
}

impl PosterError {
    /// Create a new poster error with caller location tracking.
    #[track_caller]
    pub fn new(kind: PosterErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PosterErrorKind {
        &self.kind
    }

    /// Seconds to wait before retrying, for rate-limit errors.
    pub fn retry_after(&self) -> Option<u64> {
        match &self.kind {
            PosterErrorKind::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Result type for poster operations.
pub type PosterResult<T> = Result<T, PosterError>;
