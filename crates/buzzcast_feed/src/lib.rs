//! News retrieval for buzzcast.
//!
//! [`RssFeed`] fetches and parses one feed. [`NewsFetcher`] fetches every
//! configured feed concurrently, drops failing feeds with a warning, and
//! merges the rest into one deduplicated, recency-sorted batch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod fetcher;
mod parse;
mod rss;

pub use catalog::{FeedConfig, FeedSpec, default_catalog};
pub use fetcher::{NewsFetcher, merge_articles};
pub use parse::{entry_to_article, parse_feed, safe_hostname, strip_markup};
pub use rss::RssFeed;
