//! Path normalization utilities
//!
//! Two flavours of normalization live here:
//! - [`normalize_path`] is purely lexical and is what the managed file
//!   registry and the change-set are compared with. It never touches the
//!   file system, so deleted files normalize the same way as existing ones.
//! - [`PathNormalizer`] anchors configured paths (manifest, bundle document)
//!   to the workspace root and resolves symlinks where the path exists.

use normpath::PathExt;
use std::path::{Path, PathBuf};

/// Lexically normalize a repository-relative path string
///
/// Drops `.` components and empty components (`a//b`, trailing `/`), keeps
/// `..` and a leading `/`. A path that normalizes to nothing becomes `.`.
pub fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let parts: Vec<&str> = path
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Path normalizer for workspace-relative configuration paths
pub struct PathNormalizer {
    workspace_root: PathBuf,
}

impl PathNormalizer {
    /// Create a new path normalizer rooted at `workspace_root`
    ///
    /// The root itself is normalized up front.
    pub fn new(workspace_root: &Path) -> Self {
        Self {
            workspace_root: Self::normalize(workspace_root),
        }
    }

    /// The normalized workspace root
    pub fn root(&self) -> &Path {
        &self.workspace_root
    }

    /// Resolve a configured path against the workspace root
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }

    /// Normalize a path (canonicalize with Windows path handling)
    ///
    /// For non-existent paths, normalizes the longest existing ancestor and appends
    /// the remaining components to ensure consistent symlink resolution (e.g., /var -> /private/var on macOS).
    pub fn normalize(path: &Path) -> PathBuf {
        if let Ok(norm) = path.normalize() {
            return norm.into_path_buf();
        }

        let mut current = path;
        let mut components = Vec::new();

        while !current.exists() {
            let (Some(file_name), Some(parent)) = (current.file_name(), current.parent()) else {
                return path.to_path_buf();
            };
            components.push(file_name);
            current = parent;
        }

        let mut result = current
            .normalize()
            .map(normpath::BasePathBuf::into_path_buf)
            .unwrap_or_else(|_| current.to_path_buf());
        for component in components.iter().rev() {
            result = result.join(component);
        }

        result
    }

    /// Convert a path to normalized forward-slash string representation
    pub fn to_normalized_str(path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }
}
