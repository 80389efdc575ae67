//! Pipeline commands.

use super::print_json;
use buzzcast::{
    ArticleSummary, BuzzcastConfig, BuzzcastResult, GenerationSummary, RunStatus, ScoredArticle,
    build_pipeline,
};
use serde::Serialize;
use tracing::info;

/// Run the full pipeline once and print the report.
pub async fn run_pipeline(
    mut config: BuzzcastConfig,
    dry_run: bool,
    platforms: Vec<String>,
    no_backup: bool,
) -> BuzzcastResult<RunStatus> {
    if dry_run {
        config.publish.dry_run = true;
    }
    if !platforms.is_empty() {
        config.publish.platforms = platforms;
    }
    if no_backup {
        config.backup.enabled = false;
    }

    let pipeline = build_pipeline(&config)?;
    let report = pipeline.run().await?;
    print_json("run report", &report)?;

    let status = report.status();
    info!(status = %status, "Run finished");
    Ok(status)
}

/// Print the best `limit` candidates.
pub async fn score_candidates(config: BuzzcastConfig, limit: usize) -> BuzzcastResult<RunStatus> {
    let pipeline = build_pipeline(&offline(config))?;
    let candidates: Vec<ScoredArticle> = pipeline.candidates().await?.into_iter().take(limit).collect();
    print_json("candidates", &candidates)?;
    Ok(RunStatus::Success)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedPost {
    post_text: String,
    article: ArticleSummary,
    generation: GenerationSummary,
}

/// Print the post for the top candidate.
pub async fn generate_post(config: BuzzcastConfig) -> BuzzcastResult<RunStatus> {
    let pipeline = build_pipeline(&offline(config))?;
    let (top, post) = pipeline.compose().await?;
    print_json("generated post", &GeneratedPost {
        article: ArticleSummary::from(&top),
        generation: GenerationSummary::from(&post),
        post_text: post.into_text(),
    })?;
    Ok(RunStatus::Success)
}

/// Configuration that never publishes or writes backups.
fn offline(mut config: BuzzcastConfig) -> BuzzcastConfig {
    config.publish.dry_run = true;
    config.backup.enabled = false;
    config
}
