//! buzzcast - trending news to social posts.
//!
//! One invocation fetches Japanese news feeds, scores every article for
//! buzz potential, writes a short post for the winner (with an LLM when one
//! is configured, a template otherwise) and publishes it to X and Threads.
//!
//! # Architecture
//!
//! - `buzzcast_error` - error types
//! - `buzzcast_core` - data types (Article, ScoredArticle, PublishReport, ...)
//! - `buzzcast_interface` - collaborator traits (TextGenerator, Poster, ...)
//! - `buzzcast_rate_limit` - request pacing and retry
//! - `buzzcast_scoring` - buzz scoring and ranking
//! - `buzzcast_content` - truncation, templates and post generation
//! - `buzzcast_models` - Gemini text generation
//! - `buzzcast_feed` - RSS/Atom retrieval
//! - `buzzcast_social` - X and Threads posters
//! - `buzzcast_publish` - multi-platform orchestration
//!
//! This crate adds configuration, the pipeline and the CLI, and re-exports
//! everything for convenience.
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry tracing bridge

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod backup;
mod config;
mod exit;
mod logging;
mod pipeline;

#[cfg(feature = "observability")]
pub mod observability;

pub use app::{build_generator, build_pipeline, build_publisher, parse_platforms};
pub use backup::{BackupMetadata, BackupRecord, BackupWriter};
pub use crate::config::{
    BackupSettings, BuzzcastConfig, GenerationSettings, PublishSettings, apply_env_fallbacks,
};
pub use exit::RunStatus;
pub use logging::init_logging;
pub use pipeline::{ArticleSummary, GenerationSummary, Pipeline, RunReport};

pub use buzzcast_content::*;
pub use buzzcast_core::*;
pub use buzzcast_error::*;
pub use buzzcast_feed::*;
pub use buzzcast_interface::*;
pub use buzzcast_models::*;
pub use buzzcast_publish::*;
pub use buzzcast_rate_limit::*;
pub use buzzcast_scoring::*;
pub use buzzcast_social::*;
