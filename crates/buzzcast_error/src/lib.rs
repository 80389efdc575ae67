//! Error types for buzzcast.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with source location tracking
//! - constructors use `#[track_caller]` to capture the location
//!
//! The umbrella [`BuzzcastError`] accepts any of them through `?`.
//!
//! # Examples
//!
//! ```
//! use buzzcast_error::{BuzzcastResult, HttpError};
//!
//! fn fetch_data() -> BuzzcastResult<String> {
//!     Err(HttpError::new("feeds", "Connection refused"))?
//! }
//!
//! assert!(fetch_data().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod feed;
mod generation;
mod http;
mod json;
mod poster;
mod publish;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{BuzzcastError, BuzzcastErrorKind, BuzzcastResult};
pub use feed::{FeedError, FeedErrorKind, FeedResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult, RetryableError};
pub use http::HttpError;
pub use json::JsonError;
pub use poster::{PosterError, PosterErrorKind, PosterResult};
pub use publish::{MultiPosterError, MultiPosterErrorKind, PipelineError, PipelineErrorKind};
