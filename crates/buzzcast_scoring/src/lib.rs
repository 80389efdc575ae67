//! Buzz scoring for news articles.
//!
//! [`BuzzScorer`] turns an [`Article`](buzzcast_core::Article) into a
//! [`ScoredArticle`](buzzcast_core::ScoredArticle) using a fixed keyword
//! table, a category bonus, a numeric-pattern bonus and a cross-theme bonus.
//! [`select_top`] and [`rank`] order a batch with ties kept in input order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod keywords;
mod normalize;
mod rank;
mod scorer;
mod weights;

pub use keywords::{GroupKind, KEYWORD_GROUPS, KeywordGroup};
pub use normalize::normalize;
pub use rank::{rank, select_top};
pub use scorer::BuzzScorer;
pub use weights::ScoringWeights;
