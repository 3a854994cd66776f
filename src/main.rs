//! tmplguard - guards for template-synced repositories
//!
//! Two independent checks for repositories that receive files from a
//! template: a pre-commit guard refusing edits to managed files, and a
//! validator for the template bundles document.

use clap::Parser;

mod bundles;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod git;
mod logging;
mod managed;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Managed(args) => commands::managed::run(cli.workspace, args),
        Commands::Bundles(args) => commands::bundles::run(cli.workspace, &args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
