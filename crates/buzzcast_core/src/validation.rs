//! Post validation.

use crate::text_length;
use serde::{Deserialize, Serialize};

/// Outcome of checking a post against one platform's limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the post may be published.
    pub is_valid: bool,
    /// Human-readable problems, in check order.
    pub errors: Vec<String>,
    /// Post length in characters.
    pub length: usize,
}

impl ValidationResult {
    /// Check that `text` is non-blank and at most `max_length` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use buzzcast_core::ValidationResult;
    ///
    /// let result = ValidationResult::check(&"a".repeat(281), 280);
    /// assert!(!result.is_valid);
    /// assert!(result.errors[0].contains("max: 280"));
    /// ```
    pub fn check(text: &str, max_length: usize) -> Self {
        let length = text_length(text);
        let mut errors = Vec::new();

        if text.trim().is_empty() {
            errors.push("Post text cannot be empty".to_string());
        }

        if length > max_length {
            errors.push(format!(
                "Post is too long: {} characters (max: {})",
                length, max_length
            ));
        }

        Self {
            is_valid: errors.is_empty(),
            errors,
            length,
        }
    }
}
