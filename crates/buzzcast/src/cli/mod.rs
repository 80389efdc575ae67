//! Command-line interface module.

mod commands;
mod platforms;
mod run;

pub use commands::{Cli, Commands};
pub use platforms::{check_credentials, validate_text};
pub use run::{generate_post, run_pipeline, score_candidates};

use buzzcast::{BuzzcastConfig, BuzzcastResult, JsonError, PlatformId, parse_platforms};
use serde::Serialize;

/// Print `value` as pretty JSON on stdout; `document` names it in errors.
pub(crate) fn print_json<T: Serialize>(document: &str, value: &T) -> BuzzcastResult<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| JsonError::new(document, e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// Command-line platforms, or the configured ones when none were given.
pub(crate) fn selected_platforms(config: &BuzzcastConfig, requested: &[String]) -> Vec<PlatformId> {
    if requested.is_empty() {
        parse_platforms(&config.publish.platforms)
    } else {
        parse_platforms(requested)
    }
}
