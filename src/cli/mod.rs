//! CLI definitions using clap derive API
//!
//! Argument types live in one submodule per command:
//! - managed: Managed file guard arguments
//! - bundles: Bundle validation arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundles;
pub mod completions;
pub mod managed;

pub use bundles::BundlesArgs;
pub use completions::CompletionsArgs;
pub use managed::ManagedArgs;

/// tmplguard - guards for template-synced repositories
#[derive(Parser, Debug)]
#[command(
    name = "tmplguard",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Guards for repositories kept in sync with a template",
    long_about = "tmplguard blocks commits that modify files owned by the template sync \
                  process and validates the template bundles document.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  tmplguard managed Makefile .github/workflows/ci.yml  \x1b[90m# Check a change-set\x1b[0m\n   \
                  tmplguard managed --strategy local $(git diff --name-only)\n   \
                  tmplguard bundles                                   \x1b[90m# Validate .rhiza/template-bundles.yml\x1b[0m\n   \
                  tmplguard bundles --file bundles.yml --expect-bundle core\n"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "TMPLGUARD_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refuse changes to files managed by the template
    Managed(ManagedArgs),

    /// Validate the template bundles document
    Bundles(BundlesArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
