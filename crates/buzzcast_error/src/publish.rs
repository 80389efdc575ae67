//! Multi-platform orchestration errors.

/// Orchestrator error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MultiPosterErrorKind {
    /// Live mode and not a single poster could be constructed
    #[display("No posters could be initialized for platforms: {}", _0)]
    NoPostersInitialized(String),
    /// No factory is registered under the requested platform id
    #[display("Unknown platform: {}", _0)]
    UnknownPlatform(String),
}

/// Orchestrator error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("MultiPoster Error: {} at line {} in {}", kind, line, file)]
pub struct MultiPosterError {
    kind: MultiPosterErrorKind,
    line: u32,
    file: &'static str,
}

impl MultiPosterError {
    /// Create a new orchestrator error with caller location tracking.
    #[track_caller]
    pub fn new(kind: MultiPosterErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MultiPosterErrorKind {
        &self.kind
    }
}

/// Pipeline error conditions that end an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The feed collaborator produced nothing to score
    #[display("No articles available")]
    NoArticles,
    /// Backup file could not be written
    #[display("Failed to write backup {}: {}", path, message)]
    Backup {
        /// Target path
        path: String,
        /// I/O message
        message: String,
    },
}

/// Pipeline error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    kind: PipelineErrorKind,
    line: u32,
    file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with caller location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PipelineErrorKind {
        &self.kind
    }
}
