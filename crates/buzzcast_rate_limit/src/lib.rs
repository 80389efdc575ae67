//! Request pacing for buzzcast API clients.
//!
//! - [`RequestPacer`] serializes one client's outbound calls with a minimum
//!   interval, making callers wait rather than rejecting them
//! - [`RequestPacer::execute`] adds exponential-backoff retry for errors that
//!   report themselves as transient
//! - [`retry_after_secs`] reads reset hints from rate-limit response headers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod detector;
mod pacer;

pub use config::PacingConfig;
pub use detector::{is_rate_limited, retry_after_secs};
pub use pacer::RequestPacer;
