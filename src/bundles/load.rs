//! Loading the template bundles document

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::error::{GuardError, Result, bundle};

/// Read and parse the bundles document at `path`
///
/// Fails when the file is missing, unreadable, not YAML, or empty.
pub fn load(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(bundle::not_found(path.display().to_string()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| bundle::read_failed(path.display().to_string(), e.to_string()))?;
    if content.trim().is_empty() {
        return Err(GuardError::BundlesEmpty);
    }

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| bundle::parse_failed(e.to_string()))?;
    if value.is_null() {
        return Err(GuardError::BundlesEmpty);
    }

    debug!(path = %path.display(), "loaded template bundles document");
    Ok(value)
}
