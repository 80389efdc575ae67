//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, FeedError, GenerationError, HttpError, JsonError,
    MultiPosterError, PipelineError, PosterError,
};

/// Every error the workspace can surface to a caller.
///
/// # Examples
///
/// ```
/// use buzzcast_error::{BuzzcastError, HttpError};
///
/// let http_err = HttpError::new("threads", "Connection failed");
/// let err: BuzzcastError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BuzzcastErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Text generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Platform poster error
    #[from(PosterError)]
    Poster(PosterError),
    /// Feed error
    #[from(FeedError)]
    Feed(FeedError),
    /// Orchestrator error
    #[from(MultiPosterError)]
    MultiPoster(MultiPosterError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Buzzcast error with kind discrimination.
///
/// # Examples
///
/// ```
/// use buzzcast_error::{BuzzcastResult, PipelineError, PipelineErrorKind};
///
/// fn might_fail() -> BuzzcastResult<()> {
///     Err(PipelineError::new(PipelineErrorKind::NoArticles))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Buzzcast Error: {}", _0)]
pub struct BuzzcastError(Box<BuzzcastErrorKind>);

impl BuzzcastError {
    /// Create a new error from a kind.
    pub fn new(kind: BuzzcastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuzzcastErrorKind {
        &self.0
    }
}

impl<T> From<T> for BuzzcastError
where
    T: Into<BuzzcastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for buzzcast operations.
pub type BuzzcastResult<T> = std::result::Result<T, BuzzcastError>;
