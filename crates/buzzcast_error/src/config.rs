//! Configuration loading errors.

/// Which step of configuration loading failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration layer could not be read or merged
    #[display("Failed to read configuration from {}: {}", layer, message)]
    Read {
        /// The layer: `bundled defaults`, a file path, or `layered sources`
        layer: String,
        /// Loader message
        message: String,
    },
    /// The merged layers do not match the settings schema
    #[display("Failed to parse configuration from {}: {}", layer, message)]
    Parse {
        /// The layer or layer stack being deserialized
        layer: String,
        /// Deserializer message
        message: String,
    },
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use buzzcast_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse {
///     layer: "buzzcast.toml".to_string(),
///     message: "invalid type: string, expected u32 for key `scoring.theme`".to_string(),
/// });
/// assert_eq!(err.layer(), "buzzcast.toml");
/// assert!(err.to_string().contains("scoring.theme"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }

    /// The layer that failed.
    pub fn layer(&self) -> &str {
        match &self.kind {
            ConfigErrorKind::Read { layer, .. } | ConfigErrorKind::Parse { layer, .. } => layer,
        }
    }
}
