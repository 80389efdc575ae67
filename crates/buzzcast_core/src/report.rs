//! Aggregated multi-platform reports.

use crate::{CredentialCheck, PlatformId, PublishResult, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options for a multi-platform publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOptions {
    /// Stop after the validation gate.
    #[serde(default)]
    pub validate_only: bool,
    /// Skip the credential pre-flight.
    #[serde(default)]
    pub skip_credential_test: bool,
}

/// Validation across every configured platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiValidation {
    /// Every platform accepted the text.
    pub is_valid: bool,
    /// Errors prefixed with the platform label, e.g. `X: ...`.
    pub errors: Vec<String>,
    /// Per-platform results.
    pub platform_validations: BTreeMap<String, ValidationResult>,
    /// Post length in characters.
    pub length: usize,
}

/// Platforms split by outcome, in publish order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    /// Platforms that succeeded.
    pub successful: Vec<String>,
    /// Platforms that failed.
    pub failed: Vec<String>,
}

/// Counts over a report's results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSummary {
    /// Number of results.
    pub total: usize,
    /// Number of successful results.
    pub successful: usize,
    /// Number of failed results.
    pub failed: usize,
    /// Platform names by outcome.
    pub platforms: PlatformSummary,
}

/// Result of one multi-platform publish invocation.
///
/// `success` is true iff at least one platform succeeded. The summary always
/// satisfies `total == results.len()` and `successful + failed == total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReport {
    /// At least one platform succeeded.
    pub success: bool,
    /// Terminal reason when the invocation stopped early.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Flattened validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Per-platform publish results.
    pub results: BTreeMap<String, PublishResult>,
    /// Counts over `results`.
    pub summary: PublishSummary,
    /// Per-platform validation output.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub platform_validations: BTreeMap<String, ValidationResult>,
    /// Credential pre-flight output.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub credential_checks: BTreeMap<String, CredentialCheck>,
    /// Post length in characters.
    pub length: usize,
    /// Only validation ran.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub validated_only: bool,
}

impl PublishReport {
    /// Validation gate failed; nothing was published.
    pub fn validation_failed(validation: MultiValidation) -> Self {
        Self {
            success: false,
            error: Some("Validation failed".to_string()),
            details: validation.errors,
            results: BTreeMap::new(),
            summary: PublishSummary::default(),
            platform_validations: validation.platform_validations,
            credential_checks: BTreeMap::new(),
            length: validation.length,
            validated_only: false,
        }
    }

    /// Validation passed and the caller asked for nothing more.
    pub fn validated(validation: MultiValidation) -> Self {
        Self {
            success: true,
            error: None,
            details: Vec::new(),
            results: BTreeMap::new(),
            summary: PublishSummary::default(),
            platform_validations: validation.platform_validations,
            credential_checks: BTreeMap::new(),
            length: validation.length,
            validated_only: true,
        }
    }

    /// Every platform failed its credential pre-flight.
    pub fn no_connections(
        credential_checks: BTreeMap<String, CredentialCheck>,
        length: usize,
    ) -> Self {
        Self {
            success: false,
            error: Some("No valid API connections available".to_string()),
            details: Vec::new(),
            results: BTreeMap::new(),
            summary: PublishSummary::default(),
            platform_validations: BTreeMap::new(),
            credential_checks,
            length,
            validated_only: false,
        }
    }

    /// Aggregate per-platform results, given in publish order.
    ///
    /// Only the first result for a platform counts; later ones are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use buzzcast_core::{PlatformId, PublishFailure, PublishReport, PublishResult};
    ///
    /// let report = PublishReport::from_results(
    ///     vec![
    ///         (PlatformId::new("x"), PublishResult::dry_run("dry-run-x-1")),
    ///         (PlatformId::new("threads"), PublishResult::failed(PublishFailure::Api, "boom")),
    ///     ],
    ///     Default::default(),
    ///     42,
    /// );
    ///
    /// assert!(report.success);
    /// assert_eq!(report.summary.total, 2);
    /// assert_eq!(report.summary.platforms.failed, vec!["threads".to_string()]);
    /// ```
    pub fn from_results(
        results: Vec<(PlatformId, PublishResult)>,
        credential_checks: BTreeMap<String, CredentialCheck>,
        length: usize,
    ) -> Self {
        let mut platforms = PlatformSummary::default();
        let mut by_platform = BTreeMap::new();

        for (platform, result) in results {
            let name = platform.as_str().to_string();
            if by_platform.contains_key(&name) {
                continue;
            }
            if result.success {
                platforms.successful.push(name.clone());
            } else {
                platforms.failed.push(name.clone());
            }
            by_platform.insert(name, result);
        }

        let summary = PublishSummary {
            total: by_platform.len(),
            successful: platforms.successful.len(),
            failed: platforms.failed.len(),
            platforms,
        };

        Self {
            success: summary.successful > 0,
            error: None,
            details: Vec::new(),
            results: by_platform,
            summary,
            platform_validations: BTreeMap::new(),
            credential_checks,
            length,
            validated_only: false,
        }
    }
}
