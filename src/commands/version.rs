//! Version command implementation

use crate::config::{DEFAULT_BUNDLES_PATH, DEFAULT_MANIFEST_PATH};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    for line in version_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Version, git backend and default document locations
fn version_lines() -> Vec<String> {
    let (major, minor, patch) = git2::Version::get().libgit2_version();
    vec![
        format!("tmplguard {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        format!("Git backend: libgit2 {major}.{minor}.{patch}"),
        format!("Managed files manifest: {DEFAULT_MANIFEST_PATH}"),
        format!("Template bundles document: {DEFAULT_BUNDLES_PATH}"),
    ]
}
