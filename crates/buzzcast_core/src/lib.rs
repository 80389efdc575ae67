//! Core data types for buzzcast.
//!
//! Articles flow through the pipeline as immutable values:
//! [`Article`] → [`ScoredArticle`] → [`PostText`] → per-platform
//! [`PublishResult`] → aggregated [`PublishReport`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod platform;
mod post;
mod publish;
mod report;
mod scored;
mod text;
mod validation;

pub use article::{Article, ArticleBuilder, Category};
pub use platform::PlatformId;
pub use post::{GenerationPath, PostText};
pub use publish::{CredentialCheck, PostOptions, PublishFailure, PublishResult};
pub use report::{
    MultiValidation, PlatformSummary, PublishOptions, PublishReport, PublishSummary,
};
pub use scored::ScoredArticle;
pub use text::text_length;
pub use validation::ValidationResult;
