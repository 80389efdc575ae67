//! JSON encoding errors for reports and backups.

/// A report could not be encoded as JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: cannot encode {}: {} at line {} in {}", document, message, line, file)]
pub struct JsonError {
    /// What was being encoded, e.g. `run report`.
    pub document: String,
    /// Serializer message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Record that `document` could not be encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use buzzcast_error::JsonError;
    ///
    /// let err = JsonError::new("run report", "key must be a string");
    /// assert!(err.to_string().contains("cannot encode run report"));
    /// ```
    #[track_caller]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
