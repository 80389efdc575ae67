//! Errors from building domain values.

/// Why a domain value could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set
    #[display("{} is missing required field `{}`", target, field)]
    MissingField {
        /// Type being built
        target: &'static str,
        /// Field name
        field: &'static str,
    },
    /// A field value was rejected
    #[display("{} is invalid: {}", target, message)]
    Invalid {
        /// Type being built
        target: &'static str,
        /// Why the value was rejected
        message: String,
    },
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use buzzcast_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::MissingField {
///     target: "Article",
///     field: "title",
/// });
/// assert!(err.to_string().contains("Article is missing required field `title`"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
