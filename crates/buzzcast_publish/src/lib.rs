//! Multi-platform publishing for buzzcast.
//!
//! [`MultiPoster`] validates one text against every configured platform,
//! drops platforms whose credentials fail, publishes concurrently and
//! aggregates the outcomes into a [`PublishReport`](buzzcast_core::PublishReport).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod multi;

pub use multi::{MultiPoster, PlatformInfo};
