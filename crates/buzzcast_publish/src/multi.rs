//! The publish orchestrator.

use buzzcast_core::{
    CredentialCheck, MultiValidation, PlatformId, PostOptions, PublishFailure, PublishOptions,
    PublishReport, PublishResult, text_length,
};
use buzzcast_error::{MultiPosterError, MultiPosterErrorKind};
use buzzcast_interface::Poster;
use buzzcast_social::{PosterRegistry, PosterSettings};
use futures::FutureExt;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Which requested platforms ended up with a working poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    /// Platforms requested at construction.
    pub configured: Vec<String>,
    /// Platforms with a poster.
    pub initialized: Vec<String>,
    /// Requested platforms without a poster.
    pub missing: Vec<String>,
    /// Whether the orchestrator runs in dry-run mode.
    pub dry_run: bool,
}

/// Publishes one text to several platforms.
///
/// The poster list is fixed at construction. Credential pre-flight filters
/// into a per-call list and never mutates the orchestrator.
#[derive(Clone)]
pub struct MultiPoster {
    configured: Vec<PlatformId>,
    posters: Vec<Arc<dyn Poster>>,
    dry_run: bool,
}

impl std::fmt::Debug for MultiPoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiPoster")
            .field("configured", &self.configured)
            .field(
                "posters",
                &self.posters.iter().map(|p| p.platform()).collect::<Vec<_>>(),
            )
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl MultiPoster {
    /// Build posters for `platforms` from the registry.
    ///
    /// Duplicate ids are ignored. Unknown ids and failed constructions are
    /// dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `NoPostersInitialized` in live mode when no poster could be built.
    #[instrument(skip(registry, settings))]
    pub fn new(
        registry: &PosterRegistry,
        platforms: &[PlatformId],
        settings: &PosterSettings,
        dry_run: bool,
    ) -> Result<Self, MultiPosterError> {
        let mut configured: Vec<PlatformId> = Vec::new();
        for platform in platforms {
            if !configured.contains(platform) {
                configured.push(platform.clone());
            }
        }

        let mut posters = Vec::with_capacity(configured.len());
        for platform in &configured {
            match registry.build(platform, settings, dry_run) {
                Some(Ok(poster)) => {
                    debug!(platform = %platform, dry_run = poster.is_dry_run(), "Poster initialized");
                    posters.push(poster);
                }
                Some(Err(e)) => {
                    warn!(platform = %platform, error = %e, "Failed to initialize poster");
                }
                None => {
                    let err = MultiPosterError::new(MultiPosterErrorKind::UnknownPlatform(
                        platform.to_string(),
                    ));
                    warn!(platform = %platform, error = %err, "Skipping unknown platform");
                }
            }
        }

        if posters.is_empty() && !dry_run {
            let requested = configured
                .iter()
                .map(PlatformId::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(MultiPosterError::new(
                MultiPosterErrorKind::NoPostersInitialized(requested),
            ));
        }

        Ok(Self {
            configured,
            posters,
            dry_run,
        })
    }

    /// Build directly from poster capabilities.
    ///
    /// A platform appears once; later posters for an id already present are
    /// dropped with a warning.
    pub fn from_posters(posters: Vec<Arc<dyn Poster>>, dry_run: bool) -> Self {
        let mut configured: Vec<PlatformId> = Vec::with_capacity(posters.len());
        let mut unique = Vec::with_capacity(posters.len());
        for poster in posters {
            let platform = poster.platform().clone();
            if configured.contains(&platform) {
                warn!(platform = %platform, "Ignoring duplicate poster");
                continue;
            }
            configured.push(platform);
            unique.push(poster);
        }

        Self {
            configured,
            posters: unique,
            dry_run,
        }
    }

    /// Whether this orchestrator runs in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Initialized platforms, in construction order.
    pub fn platforms(&self) -> Vec<PlatformId> {
        self.posters.iter().map(|p| p.platform().clone()).collect()
    }

    /// Validate `text` against every poster.
    ///
    /// Errors are prefixed with the platform label, e.g. `X: Post is too long`.
    pub fn validate_post(&self, text: &str) -> MultiValidation {
        let mut errors = Vec::new();
        let mut platform_validations = BTreeMap::new();

        for poster in &self.posters {
            let validation = poster.validate_post(text);
            let label = poster.platform().label();
            errors.extend(validation.errors.iter().map(|e| format!("{label}: {e}")));
            platform_validations.insert(poster.platform().to_string(), validation);
        }

        MultiValidation {
            is_valid: platform_validations.values().all(|v| v.is_valid),
            errors,
            platform_validations,
            length: text_length(text),
        }
    }

    /// Check credentials on every poster concurrently.
    ///
    /// In dry-run mode every platform reports a synthetic success.
    #[instrument(skip(self), fields(posters = self.posters.len(), dry_run = self.dry_run))]
    pub async fn test_credentials(&self) -> BTreeMap<String, CredentialCheck> {
        if self.dry_run {
            return self
                .posters
                .iter()
                .map(|p| (p.platform().to_string(), CredentialCheck::dry_run()))
                .collect();
        }

        let checks = join_all(self.posters.iter().map(|p| p.test_credentials())).await;

        self.posters
            .iter()
            .zip(checks)
            .map(|(poster, check)| {
                if !check.success {
                    warn!(platform = %poster.platform(), error = ?check.error, "Credential check failed");
                }
                (poster.platform().to_string(), check)
            })
            .collect()
    }

    /// Validate, pre-flight and publish `text` on every platform.
    #[instrument(skip(self, text), fields(length = text_length(text), dry_run = self.dry_run))]
    pub async fn publish_post(&self, text: &str, options: &PublishOptions) -> PublishReport {
        let validation = self.validate_post(text);

        if !validation.is_valid {
            warn!(errors = ?validation.errors, "Post validation failed for some platforms");
            return PublishReport::validation_failed(validation);
        }

        info!(length = validation.length, "Post validation passed for all platforms");

        if options.validate_only {
            return PublishReport::validated(validation);
        }

        let length = validation.length;
        let mut credential_checks = BTreeMap::new();
        let mut active: Vec<Arc<dyn Poster>> = self.posters.clone();

        if !self.dry_run && !options.skip_credential_test {
            credential_checks = self.test_credentials().await;
            active = self
                .posters
                .iter()
                .filter(|p| {
                    let passed = credential_checks
                        .get(p.platform().as_str())
                        .is_some_and(|c| c.success);
                    if !passed {
                        warn!(platform = %p.platform(), "Dropping platform after credential failure");
                    }
                    passed
                })
                .cloned()
                .collect();

            if active.is_empty() {
                return PublishReport::no_connections(credential_checks, length);
            }
        }

        let post_options = PostOptions::default();
        let results = join_all(
            active
                .iter()
                .map(|poster| publish_isolated(poster.as_ref(), text, &post_options)),
        )
        .await;

        for (platform, result) in &results {
            if result.success {
                info!(platform = %platform, dry_run = result.dry_run, url = ?result.url, "Published");
            } else {
                warn!(platform = %platform, error = ?result.error, "Publish failed");
            }
        }

        PublishReport::from_results(results, credential_checks, length)
    }

    /// Configured, initialized and missing platforms.
    pub fn platform_info(&self) -> PlatformInfo {
        let initialized: Vec<String> = self.posters.iter().map(|p| p.platform().to_string()).collect();
        let configured: Vec<String> = self.configured.iter().map(ToString::to_string).collect();
        let missing = configured
            .iter()
            .filter(|p| !initialized.contains(p))
            .cloned()
            .collect();

        PlatformInfo {
            configured,
            initialized,
            missing,
            dry_run: self.dry_run,
        }
    }
}

/// Publish on one poster; errors and panics become `unexpected` failures.
async fn publish_isolated(
    poster: &dyn Poster,
    text: &str,
    options: &PostOptions,
) -> (PlatformId, PublishResult) {
    let platform = poster.platform().clone();
    let outcome = AssertUnwindSafe(poster.publish_post(text, options))
        .catch_unwind()
        .await;

    let result = match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            warn!(platform = %platform, error = %e, "Poster returned an error");
            PublishResult::failed(PublishFailure::Unexpected, PublishFailure::Unexpected.summary())
                .with_details(serde_json::json!({ "message": e.kind().to_string() }))
        }
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "poster panicked".to_string());
            warn!(platform = %platform, panic = %message, "Poster panicked");
            PublishResult::failed(PublishFailure::Unexpected, PublishFailure::Unexpected.summary())
                .with_details(serde_json::json!({ "message": message }))
        }
    };

    (platform, result)
}
