//! Batch ordering.

use buzzcast_core::ScoredArticle;

/// The highest-scoring article; on ties the earliest one wins.
///
/// # Examples
///
/// ```
/// use buzzcast_core::{Article, ScoredArticle};
/// use buzzcast_scoring::select_top;
///
/// let scored = |title: &str, score| {
///     let article = Article::builder().title(title).build().unwrap();
///     ScoredArticle::new(article, score, vec![], vec![])
/// };
/// let batch = vec![scored("a", 3), scored("b", 5), scored("c", 5)];
///
/// assert_eq!(select_top(&batch).unwrap().article().title(), "b");
/// ```
pub fn select_top(batch: &[ScoredArticle]) -> Option<&ScoredArticle> {
    batch.iter().fold(None, |best: Option<&ScoredArticle>, candidate| match best {
        Some(current) if current.buzz_score() >= candidate.buzz_score() => Some(current),
        _ => Some(candidate),
    })
}

/// Sort by descending score, keeping input order among equal scores.
pub fn rank(mut batch: Vec<ScoredArticle>) -> Vec<ScoredArticle> {
    // sort_by is stable
    batch.sort_by(|a, b| b.buzz_score().cmp(a.buzz_score()));
    batch
}
