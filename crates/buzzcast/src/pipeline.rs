//! The end-to-end run: fetch, score, generate, publish, back up.

use crate::backup::{BackupRecord, BackupWriter};
use crate::exit::RunStatus;
use buzzcast_content::{ContentGenerator, GenerationLimits};
use buzzcast_core::{GenerationPath, PostText, PublishOptions, PublishReport, ScoredArticle, text_length};
use buzzcast_error::{BuzzcastResult, PipelineError, PipelineErrorKind};
use buzzcast_interface::ArticleProvider;
use buzzcast_publish::MultiPoster;
use buzzcast_scoring::{BuzzScorer, rank, select_top};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The winning article, as reported after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    /// Headline.
    pub title: String,
    /// Buzz score.
    pub buzz_score: u32,
    /// Feed name.
    pub source: String,
    /// Article link.
    pub link: String,
    /// Keywords that matched.
    pub matched_keywords: Vec<String>,
    /// Suggested hashtags.
    pub trending_topics: Vec<String>,
}

impl From<&ScoredArticle> for ArticleSummary {
    fn from(scored: &ScoredArticle) -> Self {
        Self {
            title: scored.article().title().clone(),
            buzz_score: *scored.buzz_score(),
            source: scored.article().source().clone(),
            link: scored.article().link().clone(),
            matched_keywords: scored.matched_keywords().clone(),
            trending_topics: scored.trending_topics().clone(),
        }
    }
}

/// How the post text was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    /// Generated or fallback.
    pub path: GenerationPath,
    /// Post length in characters.
    pub length: usize,
}

impl From<&PostText> for GenerationSummary {
    fn from(post: &PostText) -> Self {
        Self {
            path: *post.path(),
            length: text_length(post.text()),
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// At least one platform succeeded.
    pub success: bool,
    /// The published text.
    pub post_text: String,
    /// Platforms the publisher was built for.
    pub platforms: Vec<String>,
    /// Whether the publisher ran in dry-run mode.
    pub dry_run: bool,
    /// The winning article.
    pub article: ArticleSummary,
    /// How the text was produced.
    pub generation: GenerationSummary,
    /// Per-platform outcome.
    pub publish: PublishReport,
    /// Backup file, when one was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
}

impl RunReport {
    /// Exit status for this run.
    pub fn status(&self) -> RunStatus {
        RunStatus::from_report(&self.publish)
    }
}

/// One configured pipeline.
///
/// Collaborators are injected so tests can swap any stage.
pub struct Pipeline {
    provider: Arc<dyn ArticleProvider>,
    scorer: BuzzScorer,
    generator: ContentGenerator,
    limits: GenerationLimits,
    publisher: MultiPoster,
    options: PublishOptions,
    backup: Option<BackupWriter>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("generator", &self.generator)
            .field("limits", &self.limits)
            .field("platforms", &self.publisher.platforms())
            .field("options", &self.options)
            .field("backup", &self.backup)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Assemble a pipeline with default limits, options and no backups.
    pub fn new(
        provider: Arc<dyn ArticleProvider>,
        scorer: BuzzScorer,
        generator: ContentGenerator,
        publisher: MultiPoster,
    ) -> Self {
        Self {
            provider,
            scorer,
            generator,
            limits: GenerationLimits::default(),
            publisher,
            options: PublishOptions::default(),
            backup: None,
        }
    }

    /// Set the generation budget.
    pub fn with_limits(mut self, limits: GenerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the publish options.
    pub fn with_publish_options(mut self, options: PublishOptions) -> Self {
        self.options = options;
        self
    }

    /// Write a backup after every publish.
    pub fn with_backup(mut self, writer: BackupWriter) -> Self {
        self.backup = Some(writer);
        self
    }

    /// The publisher.
    pub fn publisher(&self) -> &MultiPoster {
        &self.publisher
    }

    /// Fetch and score, best first.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::NoArticles`] when the provider is empty.
    #[instrument(skip(self))]
    pub async fn candidates(&self) -> BuzzcastResult<Vec<ScoredArticle>> {
        let articles = self.provider.fetch_articles().await;
        if articles.is_empty() {
            warn!("No articles fetched");
            return Err(PipelineError::new(PipelineErrorKind::NoArticles).into());
        }

        info!(count = articles.len(), "Scoring articles");
        Ok(rank(self.scorer.score_all(&articles)))
    }

    /// Pick the winning article and write its post.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::NoArticles`] when the provider is empty.
    #[instrument(skip(self))]
    pub async fn compose(&self) -> BuzzcastResult<(ScoredArticle, PostText)> {
        let articles = self.provider.fetch_articles().await;
        let scored = self.scorer.score_all(&articles);
        let top = select_top(&scored)
            .cloned()
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::NoArticles))?;

        info!(
            title = %top.article().title(),
            buzz_score = top.buzz_score(),
            "Selected article"
        );

        let post = self.generator.generate(&top, &self.limits).await;
        info!(path = %post.path(), length = text_length(post.text()), "Post text ready");
        Ok((top, post))
    }

    /// Run every stage once.
    ///
    /// A backup is written whenever the post passed validation; a failed
    /// backup is logged and does not fail the run.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::NoArticles`] when the provider is empty.
    #[instrument(skip(self))]
    pub async fn run(&self) -> BuzzcastResult<RunReport> {
        let (top, post) = self.compose().await?;
        let publish = self.publisher.publish_post(post.text(), &self.options).await;

        info!(
            success = publish.success,
            successful = publish.summary.successful,
            failed = publish.summary.failed,
            "Publish finished"
        );

        let rejected = publish.platform_validations.values().any(|v| !v.is_valid);
        let backup = match &self.backup {
            Some(writer) if !publish.validated_only && !rejected => {
                let record = BackupRecord::new(post.text().clone(), &publish, chrono::Utc::now());
                match writer.write(&record).await {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!(error = %e, "Backup failed");
                        None
                    }
                }
            }
            _ => None,
        };

        Ok(RunReport {
            success: publish.success,
            post_text: post.text().clone(),
            platforms: self
                .publisher
                .platforms()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            dry_run: self.publisher.is_dry_run(),
            article: ArticleSummary::from(&top),
            generation: GenerationSummary::from(&post),
            publish,
            backup,
        })
    }
}
