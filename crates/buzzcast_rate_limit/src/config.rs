//! Pacing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum spacing between one client's outbound requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Milliseconds between requests; zero disables pacing.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
}

fn default_min_interval_ms() -> u64 {
    1000
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: default_min_interval_ms(),
        }
    }
}

impl PacingConfig {
    /// The configured interval.
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}
