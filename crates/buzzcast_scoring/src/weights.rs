//! Score weights.

use serde::{Deserialize, Serialize};

/// Points awarded by each scoring rule.
///
/// # Examples
///
/// ```
/// use buzzcast_scoring::ScoringWeights;
///
/// let weights = ScoringWeights::default();
/// assert_eq!(weights.theme, 2);
/// assert_eq!(weights.intent, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Per matched keyword in a theme group.
    #[serde(default = "default_theme")]
    pub theme: u32,
    /// Per matched keyword in an intent group.
    #[serde(default = "default_intent")]
    pub intent: u32,
    /// Once, for the `ai` category.
    #[serde(default = "default_category_ai")]
    pub category_ai: u32,
    /// Once, for the `business` category.
    #[serde(default = "default_category_business")]
    pub category_business: u32,
    /// Once, for a money, percentage or multiplier figure.
    #[serde(default = "default_numeric")]
    pub numeric: u32,
    /// Once, when both a theme and an intent group matched.
    #[serde(default = "default_cross_theme")]
    pub cross_theme: u32,
}

fn default_theme() -> u32 {
    2
}

fn default_intent() -> u32 {
    1
}

fn default_category_ai() -> u32 {
    2
}

fn default_category_business() -> u32 {
    1
}

fn default_numeric() -> u32 {
    2
}

fn default_cross_theme() -> u32 {
    1
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            intent: default_intent(),
            category_ai: default_category_ai(),
            category_business: default_category_business(),
            numeric: default_numeric(),
            cross_theme: default_cross_theme(),
        }
    }
}
