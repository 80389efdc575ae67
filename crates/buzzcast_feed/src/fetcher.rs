//! Concurrent multi-feed retrieval.

use crate::{FeedConfig, RssFeed};
use async_trait::async_trait;
use buzzcast_core::Article;
use buzzcast_error::HttpError;
use buzzcast_interface::{ArticleProvider, FeedSource};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Fetches every feed and merges the results.
#[derive(Clone)]
pub struct NewsFetcher {
    sources: Vec<Arc<dyn FeedSource>>,
    max_articles: usize,
}

impl std::fmt::Debug for NewsFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsFetcher")
            .field("sources", &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("max_articles", &self.max_articles)
            .finish()
    }
}

impl NewsFetcher {
    /// Create a fetcher over arbitrary sources.
    pub fn new(sources: Vec<Arc<dyn FeedSource>>, max_articles: usize) -> Self {
        Self {
            sources,
            max_articles,
        }
    }

    /// Create a fetcher over the configured RSS catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &FeedConfig) -> Result<Self, HttpError> {
        let client = RssFeed::client(config).map_err(|e| HttpError::new("feeds", e.to_string()))?;
        let sources = config
            .catalog
            .iter()
            .map(|spec| {
                Arc::new(RssFeed::new(client.clone(), spec.clone(), config.limit_per_feed))
                    as Arc<dyn FeedSource>
            })
            .collect();
        Ok(Self::new(sources, config.max_articles))
    }

    /// Number of configured sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

#[async_trait]
impl ArticleProvider for NewsFetcher {
    #[instrument(skip(self), fields(sources = self.sources.len()))]
    async fn fetch_articles(&self) -> Vec<Article> {
        let results = join_all(self.sources.iter().map(|source| source.fetch())).await;

        let mut batches = Vec::with_capacity(results.len());
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(articles) => batches.push(articles),
                Err(e) => warn!(feed = source.name(), error = %e, "Feed failed, skipping"),
            }
        }

        let fetched: usize = batches.iter().map(Vec::len).sum();
        let merged = merge_articles(batches, self.max_articles);
        info!(fetched, returned = merged.len(), "Fetched articles");
        merged
    }
}

/// Merge batches: drop untitled articles, keep the first article per title,
/// sort by descending publication date (stable), and cap at `max_articles`.
pub fn merge_articles(batches: Vec<Vec<Article>>, max_articles: usize) -> Vec<Article> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Article> = batches
        .into_iter()
        .flatten()
        .filter(|article| !article.title().trim().is_empty())
        .filter(|article| seen.insert(article.title().clone()))
        .collect();

    merged.sort_by(|a, b| b.pub_date().cmp(a.pub_date()));
    merged.truncate(max_articles);
    merged
}
