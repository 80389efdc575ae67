//! HTTP client construction errors.

/// An HTTP client for one collaborator could not be set up.
///
/// `client` names the collaborator (`feeds`, `x`, `threads`, ...) so a
/// failed startup points at the section of configuration to fix.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} client unavailable: {} at line {} in {}", client, message, line, file)]
pub struct HttpError {
    /// Collaborator whose client failed.
    pub client: String,
    /// Transport or TLS message.
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Record that the client for `client` could not be built.
    ///
    /// # Examples
    ///
    /// ```
    /// use buzzcast_error::HttpError;
    ///
    /// let err = HttpError::new("feeds", "TLS backend unavailable");
    /// assert_eq!(err.client, "feeds");
    /// assert!(err.to_string().contains("feeds client unavailable"));
    /// ```
    #[track_caller]
    pub fn new(client: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            client: client.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
