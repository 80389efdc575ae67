//! Process exit statuses.

use buzzcast_core::PublishReport;
use buzzcast_error::{BuzzcastError, BuzzcastErrorKind, PipelineErrorKind};
use serde::{Deserialize, Serialize};

/// How an invocation ended.
///
/// | status             | code |
/// |--------------------|------|
/// | `Success`          | 0    |
/// | `Unexpected`       | 1    |
/// | `NoContent`        | 2    |
/// | `ValidationFailed` | 3    |
/// | `AllFailed`        | 4    |
/// | `Partial`          | 5    |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    /// Every platform succeeded.
    Success,
    /// An error outside the classified taxonomy.
    Unexpected,
    /// No articles were available.
    NoContent,
    /// The post failed validation on at least one platform.
    ValidationFailed,
    /// Every platform failed.
    AllFailed,
    /// Some platforms succeeded and some failed.
    Partial,
}

impl RunStatus {
    /// Process exit code.
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Unexpected => 1,
            RunStatus::NoContent => 2,
            RunStatus::ValidationFailed => 3,
            RunStatus::AllFailed => 4,
            RunStatus::Partial => 5,
        }
    }

    /// Status for a finished publish.
    ///
    /// # Examples
    ///
    /// ```
    /// use buzzcast::{PlatformId, PublishFailure, PublishReport, PublishResult, RunStatus};
    ///
    /// let report = PublishReport::from_results(
    ///     vec![
    ///         (PlatformId::new("x"), PublishResult::published("1", None)),
    ///         (PlatformId::new("threads"), PublishResult::failed(PublishFailure::Api, "boom")),
    ///     ],
    ///     Default::default(),
    ///     10,
    /// );
    /// assert_eq!(RunStatus::from_report(&report), RunStatus::Partial);
    /// ```
    pub fn from_report(report: &PublishReport) -> Self {
        if report.platform_validations.values().any(|v| !v.is_valid) {
            RunStatus::ValidationFailed
        } else if report.success && report.summary.failed > 0 {
            RunStatus::Partial
        } else if report.success {
            RunStatus::Success
        } else {
            RunStatus::AllFailed
        }
    }

    /// Status for an invocation that ended in an error.
    pub fn from_error(err: &BuzzcastError) -> Self {
        match err.kind() {
            BuzzcastErrorKind::Pipeline(e) if matches!(e.kind(), PipelineErrorKind::NoArticles) => {
                RunStatus::NoContent
            }
            _ => RunStatus::Unexpected,
        }
    }

    /// Whether the status is [`RunStatus::Success`].
    pub fn is_success(self) -> bool {
        self == RunStatus::Success
    }
}

impl From<RunStatus> for std::process::ExitCode {
    fn from(status: RunStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}
