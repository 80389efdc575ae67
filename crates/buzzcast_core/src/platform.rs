//! Platform identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a publishing platform, such as `x` or `threads`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct PlatformId(pub String);

impl PlatformId {
    /// Create an identifier, normalized to lowercase.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_lowercase())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label used when prefixing messages, e.g. `X` or `THREADS`.
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl From<&str> for PlatformId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
