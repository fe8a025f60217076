//! Manifest loading and discovery.
//!
//! Resolution order:
//!
//! 1. An explicit path, if one is given. A missing file is an error.
//! 2. A `nav.toml` discovered in the current directory or a parent.
//! 3. The built-in manifest.
//!
//! Every source is validated before the manifest is returned; a violation
//! is fatal to the build that consumes it.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::manifest::NavigationManifest;

/// Manifest filename to search for.
const MANIFEST_FILENAME: &str = "nav.toml";

/// Load the navigation manifest.
///
/// If `path` is provided, loads from that file (`.json` parses as a JSON
/// array, anything else as TOML). Otherwise searches for `nav.toml` in the
/// current directory and parents, falling back to the built-in manifest.
///
/// # Errors
///
/// Returns [`ManifestError::NotFound`] if an explicit `path` doesn't exist,
/// and [`ManifestError::Malformed`] if any source violates the manifest
/// invariants.
pub fn load(path: Option<&Path>) -> Result<NavigationManifest, ManifestError> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }
        return load_from_file(path);
    }

    if let Some(discovered) = discover_manifest() {
        tracing::debug!(path = %discovered.display(), "Discovered navigation manifest");
        return load_from_file(&discovered);
    }

    let manifest = NavigationManifest::builtin();
    manifest.validate()?;
    tracing::info!(
        entry_count = manifest.len(),
        source = "builtin",
        "Navigation manifest loaded"
    );
    Ok(manifest)
}

/// Load and validate a manifest from a specific file.
fn load_from_file(path: &Path) -> Result<NavigationManifest, ManifestError> {
    let content = std::fs::read_to_string(path)?;

    let manifest = if path.extension().and_then(OsStr::to_str) == Some("json") {
        NavigationManifest::from_json_str(&content)?
    } else {
        NavigationManifest::from_toml_str(&content)?
    };

    tracing::info!(
        entry_count = manifest.len(),
        path = %path.display(),
        "Navigation manifest loaded"
    );
    Ok(manifest)
}

/// Search for a manifest file in current directory and parents.
fn discover_manifest() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;
    loop {
        let candidate = current.join(MANIFEST_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
