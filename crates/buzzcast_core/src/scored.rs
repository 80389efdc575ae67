//! Scored article type.

use crate::Article;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An article annotated with its buzz score.
///
/// `matched_keywords` keeps scan order and may repeat a keyword that appears
/// in more than one group. `trending_topics` holds at most three hashtags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct ScoredArticle {
    /// The scored article.
    article: Article,
    /// Relative ranking signal; no upper bound.
    buzz_score: u32,
    /// Literal keywords that matched, in scan order.
    matched_keywords: Vec<String>,
    /// Suggested hashtags, first matched first kept.
    trending_topics: Vec<String>,
}
