//! Base reference resolution
//!
//! Picks the revision that committed-but-unmerged changes are compared
//! against. The CI-provided target branch wins, then the conventional
//! default branch names.

use tracing::debug;

use super::VcsQuery;

/// Conventional branch names tried after the CI hint, in order
pub const FALLBACK_BASE_REFS: [&str; 4] = ["origin/main", "origin/master", "main", "master"];

/// Candidate revision names in resolution order
///
/// A hint is tried as a remote-tracking branch first, since CI checkouts
/// usually have no local branch of that name.
pub fn base_ref_candidates(hint: Option<&str>) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
        if !hint.starts_with("origin/") {
            candidates.push(format!("origin/{hint}"));
        }
        candidates.push(hint.to_string());
    }

    for fallback in FALLBACK_BASE_REFS {
        if !candidates.iter().any(|c| c == fallback) {
            candidates.push(fallback.to_string());
        }
    }

    candidates
}

/// Return the first candidate that resolves to a commit, if any
pub fn resolve_base_reference(vcs: &dyn VcsQuery, hint: Option<&str>) -> Option<String> {
    let resolved = base_ref_candidates(hint)
        .into_iter()
        .find(|candidate| vcs.resolves(candidate));
    debug!(?hint, ?resolved, "resolved base reference");
    resolved
}
