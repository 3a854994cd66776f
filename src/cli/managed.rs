use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_MANIFEST_PATH, DetectionStrategy, QueryErrorPolicy};

/// Arguments for the managed command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check staged files (pre-commit passes the file names):\n    tmplguard managed Makefile pyproject.toml\n\n\
                  Only look at the working tree:\n    tmplguard managed --strategy local Makefile\n\n\
                  Compare with a specific base branch in CI:\n    tmplguard managed --ci --base-ref develop Makefile\n\n\
                  Ignore git failures:\n    tmplguard managed --on-git-error assume-unmodified Makefile")]
pub struct ManagedArgs {
    /// Changed paths to check, relative to the workspace
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Managed files manifest, one path per line
    #[arg(long, env = "TMPLGUARD_MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// How modifications are detected
    #[arg(long, value_enum, env = "TMPLGUARD_STRATEGY", default_value_t = DetectionStrategy::default())]
    pub strategy: DetectionStrategy,

    /// What a failing git query means for the file being checked
    #[arg(long, value_enum, env = "TMPLGUARD_ON_GIT_ERROR", default_value_t = QueryErrorPolicy::default())]
    pub on_git_error: QueryErrorPolicy,

    /// Treat this run as CI, regardless of the CI variable
    #[arg(long)]
    pub ci: bool,

    /// Base branch to compare against (defaults to the CI target branch)
    #[arg(long, value_name = "REF")]
    pub base_ref: Option<String>,
}
