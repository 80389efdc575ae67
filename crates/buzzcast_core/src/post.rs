//! Generated post text.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which path produced a post.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationPath {
    /// Text came from the generation backend.
    Generated,
    /// Text came from a deterministic template.
    Fallback,
}

/// Post text together with the budget it was produced for.
///
/// The budget applies to the body only; an appended link is not counted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct PostText {
    /// The post body, possibly followed by a newline and link.
    text: String,
    /// Character budget the body was truncated to.
    max_length: usize,
    /// Generation path.
    path: GenerationPath,
}

impl PostText {
    /// Consume the post and return its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
