//! Command helper utilities

use std::path::PathBuf;

use crate::common::path_normalizer::PathNormalizer;
use crate::error::{Result, fs};

/// Resolve the workspace root from the optional `--workspace` argument
///
/// Falls back to the current directory. The result is normalized so git
/// discovery and displayed paths agree.
pub fn resolve_workspace(workspace: Option<PathBuf>) -> Result<PathNormalizer> {
    let root = match workspace {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))?,
    };
    Ok(PathNormalizer::new(&root))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_explicit_workspace() {
        let temp = TempDir::new().unwrap();
        let workspace = resolve_workspace(Some(temp.path().to_path_buf())).unwrap();
        assert!(workspace.root().is_absolute());
        assert!(workspace.root().ends_with(temp.path().file_name().unwrap()));
    }

    #[test]
    fn test_resolve_defaults_to_current_dir() {
        let workspace = resolve_workspace(None).unwrap();
        assert!(workspace.root().is_dir());
    }
}
