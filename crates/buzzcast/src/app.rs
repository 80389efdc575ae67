//! Wiring from configuration to collaborators.

use crate::backup::BackupWriter;
use crate::config::{BuzzcastConfig, GenerationSettings};
use crate::pipeline::Pipeline;
use buzzcast_content::{ContentGenerator, RandomTemplate};
use buzzcast_core::{PlatformId, PublishOptions};
use buzzcast_error::{BuzzcastResult, MultiPosterError};
use buzzcast_feed::NewsFetcher;
use buzzcast_interface::{ArticleProvider, TextGenerator};
use buzzcast_models::GeminiClient;
use buzzcast_publish::MultiPoster;
use buzzcast_rate_limit::RequestPacer;
use buzzcast_scoring::BuzzScorer;
use buzzcast_social::PosterRegistry;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Split platform ids, accepting comma-separated entries.
///
/// # Examples
///
/// ```
/// use buzzcast::parse_platforms;
///
/// let ids = parse_platforms(&["x, threads".to_string(), "".to_string()]);
/// let names: Vec<_> = ids.iter().map(|p| p.as_str()).collect();
/// assert_eq!(names, ["x", "threads"]);
/// ```
pub fn parse_platforms(entries: &[String]) -> Vec<PlatformId> {
    entries
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| PlatformId::new(id.to_lowercase()))
        .collect()
}

/// Content generator for `settings`.
///
/// Without an API key, or when the client cannot be built, every post
/// uses the template fallback.
#[instrument(skip_all)]
pub fn build_generator(settings: &GenerationSettings) -> ContentGenerator {
    let backend: Option<Arc<dyn TextGenerator>> = match settings.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => match GeminiClient::new(key, settings.gemini()) {
            Ok(client) => {
                info!(model = client.model(), "Using Gemini for post text");
                let client = client.with_pacer(RequestPacer::from_config(&settings.pacing));
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            Err(e) => {
                warn!(error = %e, "Gemini client unavailable, using templates");
                None
            }
        },
        _ => {
            info!("No Gemini API key, using templates");
            None
        }
    };

    ContentGenerator::new(backend).with_selector(RandomTemplate)
}

/// Publisher for `platforms` with the default X and Threads factories.
///
/// # Errors
///
/// Returns an error in live mode when no poster can be built.
pub fn build_publisher(
    config: &BuzzcastConfig,
    platforms: &[PlatformId],
    dry_run: bool,
) -> Result<MultiPoster, MultiPosterError> {
    let registry = PosterRegistry::with_defaults();
    MultiPoster::new(&registry, platforms, &config.platforms, dry_run)
}

/// Full pipeline from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client or the publisher cannot be built.
#[instrument(skip_all, fields(dry_run = config.publish.dry_run))]
pub fn build_pipeline(config: &BuzzcastConfig) -> BuzzcastResult<Pipeline> {
    let provider: Arc<dyn ArticleProvider> = Arc::new(NewsFetcher::from_config(&config.feeds)?);
    let platforms = parse_platforms(&config.publish.platforms);
    let publisher = build_publisher(config, &platforms, config.publish.dry_run)?;

    let options = PublishOptions {
        validate_only: false,
        skip_credential_test: config.publish.skip_credential_test,
    };

    let mut pipeline = Pipeline::new(
        provider,
        BuzzScorer::new(config.scoring.clone()),
        build_generator(&config.generation),
        publisher,
    )
    .with_limits(config.generation.limits())
    .with_publish_options(options);

    if config.backup.enabled {
        pipeline = pipeline.with_backup(BackupWriter::new(config.backup.directory.clone()));
    }

    Ok(pipeline)
}
