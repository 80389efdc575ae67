//! Social platform posters for buzzcast.
//!
//! Each adapter implements [`Poster`](buzzcast_interface::Poster):
//! - [`XPoster`]: X API v2, 280 characters
//! - [`ThreadsPoster`]: Threads Graph API two-step publish, 500 characters
//!
//! Adapters are created through a [`PosterRegistry`], which maps a platform
//! id to a factory. Adding a platform means registering a factory; nothing
//! downstream changes.
//!
//! # Example
//!
//! ```
//! use buzzcast_core::PlatformId;
//! use buzzcast_social::{PosterRegistry, PosterSettings};
//!
//! let registry = PosterRegistry::with_defaults();
//! let poster = registry
//!     .build(&PlatformId::new("x"), &PosterSettings::default(), true)
//!     .expect("x is registered")
//!     .expect("dry run never fails");
//! assert_eq!(poster.max_length(), 280);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod outcome;
mod registry;
mod settings;
mod threads;
mod x;

pub use outcome::{classify, dry_run_id, error_from_status, preflight, vendor_message};
pub use registry::{PosterFactory, PosterRegistry};
pub use settings::{
    PosterSettings, ThreadsCredentials, ThreadsSettings, XCredentials, XSettings,
};
pub use threads::ThreadsPoster;
pub use x::XPoster;
