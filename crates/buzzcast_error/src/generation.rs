//! Text generation error types and retry logic.

/// Text generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key missing or blank
    #[display("GEMINI_API_KEY is not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the body could not be read
    #[display("Generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response carried no usable text
    #[display("Generation response contained no text")]
    EmptyResponse,
}

impl GenerationErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GenerationErrorKind::ApiRequest(_) => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            GenerationErrorKind::HttpError { status_code, .. } => match *status_code {
                429 => (5000, 3, 40),
                503 => (2000, 4, 30),
                500 | 502 | 504 => (1000, 3, 8),
                408 => (2000, 3, 20),
                _ => (2000, 3, 30),
            },
            GenerationErrorKind::ApiRequest(_) => (1000, 2, 5),
            _ => (2000, 3, 30),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use buzzcast_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use buzzcast_error::{GenerationError, GenerationErrorKind, RetryableError};
///
/// let err = GenerationError::new(GenerationErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// let (backoff, retries, _max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 2000);
/// assert_eq!(retries, 4);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 or 429 return true. Permanent errors like
    /// 401 or 400 return false.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 3, 30)
    }
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}

/// Result type for text generation.
pub type GenerationResult<T> = Result<T, GenerationError>;
