//! Feed document parsing.

use buzzcast_core::{Article, Category};
use buzzcast_error::{FeedError, FeedErrorKind, FeedResult};
use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use feed_rs::parser;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Remove markup, decode common entities and collapse whitespace.
///
/// # Examples
///
/// ```
/// use buzzcast_feed::strip_markup;
///
/// assert_eq!(strip_markup("<p>円安 &amp; 株価</p>\n<br/>続報"), "円安 & 株価 続報");
/// ```
pub fn strip_markup(html: &str) -> String {
    let text = TAG.replace_all(html, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Host name of `url`, or `unknown`.
pub fn safe_hostname(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Convert one entry; entries without a title are skipped.
///
/// A missing date becomes `now`.
pub fn entry_to_article(
    entry: Entry,
    category: &Category,
    source: &str,
    now: DateTime<Utc>,
) -> Option<Article> {
    let title = entry
        .title
        .map(|t| strip_markup(&t.content))
        .filter(|t| !t.is_empty())?;

    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .unwrap_or_default();

    let snippet = entry
        .summary
        .map(|s| s.content)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| entry.content.and_then(|c| c.body))
        .map(|raw| strip_markup(&raw))
        .unwrap_or_default();

    let pub_date = entry
        .published
        .or(entry.updated)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(now);

    Article::builder()
        .title(title)
        .content_snippet(snippet)
        .category(category.clone())
        .source(source)
        .link(link)
        .pub_date(pub_date)
        .build()
        .ok()
}

/// Parse a feed document into at most `limit` articles.
///
/// The source name is the feed title, or the host of `url`.
///
/// # Errors
///
/// Returns an error if the body is not RSS or Atom.
pub fn parse_feed(
    body: &[u8],
    url: &str,
    category: &Category,
    limit: usize,
    now: DateTime<Utc>,
) -> FeedResult<Vec<Article>> {
    let feed = parser::parse(body).map_err(|e| {
        FeedError::new(FeedErrorKind::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    })?;

    let source = feed
        .title
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| safe_hostname(url));

    let total = feed.entries.len();
    let articles: Vec<Article> = feed
        .entries
        .into_iter()
        .take(limit)
        .filter_map(|entry| entry_to_article(entry, category, &source, now))
        .collect();

    debug!(url, source = %source, total, kept = articles.len(), "Parsed feed");
    Ok(articles)
}
