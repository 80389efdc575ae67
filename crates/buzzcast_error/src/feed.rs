//! Feed retrieval errors.

/// Feed error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FeedErrorKind {
    /// Request could not be sent or timed out
    #[display("Failed to fetch {}: {}", url, message)]
    Fetch {
        /// Feed URL
        url: String,
        /// Transport message
        message: String,
    },
    /// Non-success status from the feed host
    #[display("Feed {} returned HTTP {}", url, status)]
    Status {
        /// Feed URL
        url: String,
        /// HTTP status code
        status: u16,
    },
    /// Body was not a parsable RSS/Atom document
    #[display("Failed to parse feed {}: {}", url, message)]
    Parse {
        /// Feed URL
        url: String,
        /// Parser message
        message: String,
    },
}

/// Feed error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Feed Error: {} at line {} in {}", kind, line, file)]
pub struct FeedError {
    kind: FeedErrorKind,
    line: u32,
    file: &'static str,
}

impl FeedError {
    /// Create a new feed error with caller location tracking.
    #[track_caller]
    pub fn new(kind: FeedErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FeedErrorKind {
        &self.kind
    }
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
