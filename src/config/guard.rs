//! Managed file guard settings

use std::path::PathBuf;

use clap::ValueEnum;

use super::CiEnvironment;

/// How modifications are detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DetectionStrategy {
    /// Working tree and index status only
    Local,

    /// Status, plus the diff against the base reference when running in CI
    #[default]
    LocalAndBase,
}

/// What a failing git query means for the file being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QueryErrorPolicy {
    /// Fail closed: the file counts as modified
    #[default]
    AssumeModified,

    /// Fail open per check: the failing check is skipped
    AssumeUnmodified,
}

impl QueryErrorPolicy {
    /// Outcome to use in place of a failed query
    pub fn fallback(self) -> bool {
        matches!(self, QueryErrorPolicy::AssumeModified)
    }
}

/// Settings for one guard run
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Managed files manifest, already resolved against the workspace
    pub manifest: PathBuf,

    pub strategy: DetectionStrategy,

    pub on_query_error: QueryErrorPolicy,

    pub ci: CiEnvironment,
}

impl GuardConfig {
    /// Whether the base reference comparison takes part in this run
    pub fn compares_base(&self) -> bool {
        self.strategy == DetectionStrategy::LocalAndBase && self.ci.in_ci
    }
}
