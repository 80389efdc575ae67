//! Trait definitions for pipeline collaborators.

use async_trait::async_trait;
use buzzcast_core::{
    Article, CredentialCheck, PlatformId, PostOptions, PublishResult, ValidationResult,
};
use buzzcast_error::{FeedResult, PosterResult};

/// A black-box text producer.
///
/// Absence is a normal outcome: `None` means the backend was unavailable or
/// refused, and callers fall back rather than fail.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`, or `None` if nothing usable came back.
    async fn generate_text(&self, prompt: &str) -> Option<String>;

    /// Backend name for logging (e.g. "gemini").
    fn name(&self) -> &str;
}

/// A single feed that yields articles.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed.
    async fn fetch(&self) -> FeedResult<Vec<Article>>;

    /// Human-readable feed name.
    fn name(&self) -> &str;
}

/// Produces the batch of candidate articles for one run.
///
/// Implementations deduplicate by title, sort by descending recency and cap
/// the batch. Feed-level failures shrink the batch and are never returned.
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Fetch the current batch of articles.
    async fn fetch_articles(&self) -> Vec<Article>;
}

/// The capability every platform adapter provides.
///
/// Construction in dry-run mode never fails. Construction in live mode with
/// incomplete credentials is an error.
#[async_trait]
pub trait Poster: Send + Sync {
    /// Platform identifier (e.g. "x").
    fn platform(&self) -> &PlatformId;

    /// Maximum post length in characters.
    fn max_length(&self) -> usize;

    /// Whether this poster skips every network call.
    fn is_dry_run(&self) -> bool;

    /// Check the text against this platform's limits. Pure.
    fn validate_post(&self, text: &str) -> ValidationResult {
        ValidationResult::check(text, self.max_length())
    }

    /// Perform a cheap authenticated read. Must not mutate remote state.
    async fn test_credentials(&self) -> CredentialCheck;

    /// Validate, then publish unless `validate_only` or dry run.
    ///
    /// Classified failures (validation, rate limit, duplicate, API error) are
    /// returned as failed results; `Err` is reserved for anything else.
    async fn publish_post(
        &self,
        text: &str,
        options: &PostOptions,
    ) -> PosterResult<PublishResult>;
}
