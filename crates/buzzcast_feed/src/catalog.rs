//! Feed catalog and retrieval settings.

use buzzcast_core::Category;
use serde::{Deserialize, Serialize};

/// One feed and the category its articles get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSpec {
    /// Feed URL.
    pub url: String,
    /// Category assigned to every article.
    pub category: Category,
}

impl FeedSpec {
    /// Create a feed spec.
    pub fn new(url: impl Into<String>, category: Category) -> Self {
        Self {
            url: url.into(),
            category,
        }
    }
}

/// The built-in Japanese AI, business and tech feeds.
pub fn default_catalog() -> Vec<FeedSpec> {
    vec![
        FeedSpec::new("https://rss.itmedia.co.jp/rss/2.0/aiplus.xml", Category::Ai),
        FeedSpec::new("https://zenn.dev/topics/%E7%94%9F%E6%88%90ai/feed", Category::Ai),
        FeedSpec::new("https://zenn.dev/topics/llm/feed", Category::Ai),
        FeedSpec::new("https://www.businessinsider.jp/feed/index.xml", Category::Business),
        FeedSpec::new("https://toyokeizai.net/list/feed/rss", Category::Business),
        FeedSpec::new("https://diamond.jp/list/feed/rss/dol", Category::Business),
        FeedSpec::new("https://rss.itmedia.co.jp/rss/2.0/topstory.xml", Category::Tech),
    ]
}

/// Retrieval settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feeds to fetch.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<FeedSpec>,
    /// Items taken from the top of each feed.
    #[serde(default = "default_limit_per_feed")]
    pub limit_per_feed: usize,
    /// Size of the merged batch.
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    /// Per-feed request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent to feed hosts.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_limit_per_feed() -> usize {
    3
}

fn default_max_articles() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; buzzcast/0.1)".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            limit_per_feed: default_limit_per_feed(),
            max_articles: default_max_articles(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
