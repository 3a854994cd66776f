//! Managed files registry
//!
//! The manifest is a text file with one repository-relative path per line.
//! Blank lines and lines starting with `#` are ignored.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::common::path_normalizer::normalize_path;
use crate::error::{Result, guard};

/// Set of paths owned by the template sync, immutable once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedFileRegistry {
    paths: HashSet<String>,
}

impl ManagedFileRegistry {
    /// Parse manifest content
    pub fn parse(content: &str) -> Self {
        let paths = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(normalize_path)
            .collect();
        Self { paths }
    }

    /// Whether a normalized path is managed
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Load the registry from `path`
///
/// A missing manifest means nothing is managed yet and yields an empty
/// registry. Any other read failure is an error.
pub fn load_registry(path: &Path) -> Result<ManagedFileRegistry> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let registry = ManagedFileRegistry::parse(&content);
            debug!(path = %path.display(), entries = registry.len(), "loaded managed files");
            Ok(registry)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no managed files manifest");
            Ok(ManagedFileRegistry::default())
        }
        Err(e) => Err(guard::manifest_read_failed(
            path.display().to_string(),
            e.to_string(),
        )),
    }
}
