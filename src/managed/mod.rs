//! Managed file guard
//!
//! Refuses changes to files owned by the template sync process. A changed
//! path is a violation when it is listed in the managed files manifest and
//! git reports it as modified, either locally or (in CI, with the
//! `local-and-base` strategy) relative to the base reference.

pub mod registry;
pub mod report;

use tracing::{debug, warn};

use crate::common::path_normalizer::normalize_path;
use crate::config::GuardConfig;
use crate::git::VcsQuery;
use crate::git::refs;

pub use registry::{ManagedFileRegistry, load_registry};
pub use report::violation_report;

/// Result of checking a change-set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Modified managed paths, normalized, in change-set order
    pub violations: Vec<String>,
}

impl CheckOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.violations.is_empty())
    }
}

/// Checks change-sets against a registry using a version-control backend
pub struct ManagedFileGuard<'a> {
    registry: &'a ManagedFileRegistry,
    config: &'a GuardConfig,
    vcs: &'a dyn VcsQuery,
}

impl<'a> ManagedFileGuard<'a> {
    pub fn new(
        registry: &'a ManagedFileRegistry,
        config: &'a GuardConfig,
        vcs: &'a dyn VcsQuery,
    ) -> Self {
        Self {
            registry,
            config,
            vcs,
        }
    }

    /// Base reference for committed-but-unmerged changes
    ///
    /// Always `None` unless the strategy compares against a base and the
    /// process runs in CI.
    pub fn resolve_base_reference(&self) -> Option<String> {
        if !self.config.compares_base() {
            debug!(
                strategy = ?self.config.strategy,
                in_ci = self.config.ci.in_ci,
                "base comparison disabled"
            );
            return None;
        }
        refs::resolve_base_reference(self.vcs, self.config.ci.base_hint.as_deref())
    }

    /// Whether `path` counts as modified
    ///
    /// A failing query is replaced by the configured policy's fallback. The
    /// base comparison runs independently of the outcome of the status query.
    pub fn is_modified(&self, path: &str, base_ref: Option<&str>) -> bool {
        let policy = self.config.on_query_error;

        match self.vcs.status(path) {
            Ok(true) => return true,
            Ok(false) => {}
            Err(e) => {
                warn!(path, error = %e, ?policy, "status query failed");
                if policy.fallback() {
                    return true;
                }
            }
        }

        let Some(base) = base_ref.filter(|_| self.config.compares_base()) else {
            return false;
        };

        self.vcs.diff(base, path).unwrap_or_else(|e| {
            warn!(path, base, error = %e, ?policy, "diff query failed");
            policy.fallback()
        })
    }

    /// Check a change-set
    ///
    /// Returns immediately, without querying git, when either the change-set
    /// or the registry is empty.
    pub fn check(&self, changed_paths: &[String]) -> CheckOutcome {
        if changed_paths.is_empty() || self.registry.is_empty() {
            debug!(
                changed = changed_paths.len(),
                managed = self.registry.len(),
                "nothing to check"
            );
            return CheckOutcome::default();
        }

        let mut candidates: Vec<String> = Vec::new();
        for path in changed_paths.iter().map(|path| normalize_path(path)) {
            if self.registry.contains(&path) && !candidates.contains(&path) {
                candidates.push(path);
            }
        }

        if candidates.is_empty() {
            debug!("no managed files in change-set");
            return CheckOutcome::default();
        }

        let base_ref = self.resolve_base_reference();
        let violations = candidates
            .into_iter()
            .filter(|path| self.is_modified(path, base_ref.as_deref()))
            .collect();

        CheckOutcome { violations }
    }
}
