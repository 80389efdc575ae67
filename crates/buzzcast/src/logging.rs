//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins; otherwise the level is `debug` when `verbose`, else
/// `info`. `json` switches to one JSON object per line.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(
    verbose: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
