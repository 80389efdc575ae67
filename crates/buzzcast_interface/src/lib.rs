//! Capability traits for buzzcast.
//!
//! The pipeline depends only on these traits; concrete feeds, generation
//! backends and platform clients live in their own crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ArticleProvider, FeedSource, Poster, TextGenerator};
