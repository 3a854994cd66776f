//! Managed command implementation
//!
//! Loads the managed files manifest, checks the given change-set against it
//! and prints the violation report.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::ManagedArgs;
use crate::common::path_normalizer::PathNormalizer;
use crate::config::{CiEnvironment, GuardConfig};
use crate::error::{Result, guard};
use crate::git::GitRepository;
use crate::managed::{CheckOutcome, ManagedFileGuard, load_registry, violation_report};
use crate::ui;

use super::helpers::resolve_workspace;

/// Run managed command
pub fn run(workspace: Option<PathBuf>, args: ManagedArgs) -> Result<()> {
    let workspace = resolve_workspace(workspace)?;
    let config = guard_config(&workspace, &args);
    debug!(?config, "managed file guard");

    let outcome = check(&workspace, &config, &args.paths)?;
    if outcome.exit_code() == 0 {
        return Ok(());
    }

    let manifest = PathNormalizer::to_normalized_str(&args.manifest);
    ui::print_violations(&violation_report(&manifest, &outcome.violations));
    Err(guard::modified(outcome.violations.len()))
}

/// Settings from the command line, falling back to the CI environment
fn guard_config(workspace: &PathNormalizer, args: &ManagedArgs) -> GuardConfig {
    let mut ci = CiEnvironment::from_env();
    ci.in_ci |= args.ci;
    if let Some(base_ref) = &args.base_ref {
        ci.base_hint = Some(base_ref.clone());
    }

    GuardConfig {
        manifest: workspace.resolve(&args.manifest),
        strategy: args.strategy,
        on_query_error: args.on_git_error,
        ci,
    }
}

fn check(workspace: &PathNormalizer, config: &GuardConfig, paths: &[String]) -> Result<CheckOutcome> {
    let registry = load_registry(&config.manifest)?;
    let repository = GitRepository::discover(workspace.root());
    Ok(ManagedFileGuard::new(&registry, config, &repository).check(paths))
}
