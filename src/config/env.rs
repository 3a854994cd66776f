//! CI environment detection
//!
//! Reads the automated-pipeline flag and the target-branch hint that CI
//! providers export for merge/pull requests.

/// Environment flag set by CI providers
pub const CI_FLAG_VAR: &str = "CI";

/// Target-branch hints, checked in order
pub const BASE_HINT_VARS: [&str; 2] = ["GITHUB_BASE_REF", "CI_MERGE_REQUEST_TARGET_BRANCH_NAME"];

/// What the process knows about the pipeline it runs in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnvironment {
    /// Running inside an automated pipeline
    pub in_ci: bool,

    /// Branch the change will be merged into, if the provider exported one
    pub base_hint: Option<String>,
}

impl CiEnvironment {
    /// Read the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let in_ci = lookup(CI_FLAG_VAR).is_some_and(|value| is_truthy(&value));
        let base_hint = BASE_HINT_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        Self { in_ci, base_hint }
    }
}

/// Boolean-ish environment value: `1`, `true`, `yes`, `on` in any case
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
