//! Manifest error type.

use std::path::PathBuf;

/// Error raised while loading or validating the navigation manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Manifest file not found.
    #[error("Manifest file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The declared structure violates a manifest invariant
    /// (empty label, empty link target, group without items,
    /// or an entry that is neither a link nor a group).
    #[error("Malformed manifest: {0}")]
    Malformed(String),
}

impl ManifestError {
    /// Build a [`ManifestError::Malformed`] for an empty required field.
    pub(crate) fn empty_field(field: &str) -> Self {
        Self::Malformed(format!("{field} cannot be empty"))
    }
}
