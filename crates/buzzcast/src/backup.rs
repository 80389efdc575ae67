//! JSON backups of published posts.

use buzzcast_core::{PublishReport, PublishResult, text_length};
use buzzcast_error::{PipelineError, PipelineErrorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Summary fields stored next to the raw results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMetadata {
    /// Post length in characters.
    pub length: usize,
    /// Platforms that produced a result.
    pub platforms: Vec<String>,
    /// At least one platform published for real.
    pub posted: bool,
    /// Every result came from a dry run.
    pub dry_run: bool,
}

/// One backup file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    /// When the run finished.
    pub timestamp: DateTime<Utc>,
    /// The text that was published.
    pub post_text: String,
    /// Per-platform results.
    pub results: BTreeMap<String, PublishResult>,
    /// Derived summary.
    pub metadata: BackupMetadata,
}

impl BackupRecord {
    /// Build a record from a publish report.
    pub fn new(post_text: impl Into<String>, report: &PublishReport, timestamp: DateTime<Utc>) -> Self {
        let post_text = post_text.into();
        let metadata = BackupMetadata {
            length: text_length(&post_text),
            platforms: report.results.keys().cloned().collect(),
            posted: report.results.values().any(|r| r.success && !r.dry_run),
            dry_run: report.results.values().all(|r| r.dry_run),
        };

        Self {
            timestamp,
            post_text,
            results: report.results.clone(),
            metadata,
        }
    }

    /// File name for this record, e.g. `post-20250610-090000.json`.
    pub fn file_name(&self) -> String {
        format!("post-{}.json", self.timestamp.format("%Y%m%d-%H%M%S"))
    }
}

/// Writes backup records into a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupWriter {
    directory: PathBuf,
}

impl BackupWriter {
    /// Write backups into `directory`, created on first use.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Write `record` as pretty JSON and return the file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    #[instrument(skip_all, fields(directory = %self.directory.display()))]
    pub async fn write(&self, record: &BackupRecord) -> Result<PathBuf, PipelineError> {
        let path = self.directory.join(record.file_name());
        let backup_error = |message: String| {
            PipelineError::new(PipelineErrorKind::Backup {
                path: path.display().to_string(),
                message,
            })
        };

        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| backup_error(e.to_string()))?;

        let json = serde_json::to_string_pretty(record).map_err(|e| backup_error(e.to_string()))?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| backup_error(e.to_string()))?;

        debug!(path = %path.display(), "Wrote post backup");
        Ok(path)
    }
}
