//! Post text production for buzzcast.
//!
//! - [`truncate`] fits text into a character budget without splitting a
//!   sentence or a user-perceived character
//! - [`build_prompt`] turns a scored article into a generation instruction
//! - [`ContentGenerator`] calls an optional [`TextGenerator`] and falls back
//!   to deterministic templates when it is absent or returns nothing
//!
//! [`TextGenerator`]: buzzcast_interface::TextGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod prompt;
mod template;
mod truncate;

pub use generator::{ContentGenerator, GenerationLimits};
pub use prompt::build_prompt;
pub use template::{FALLBACK_TEMPLATES, FixedTemplate, RandomTemplate, TemplateSelector, render_fallback};
pub use truncate::{SENTENCE_TERMINATORS, TruncateOptions, cap_sentences, truncate};
