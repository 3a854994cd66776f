//! Error types and handling for tmplguard
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Template bundle document errors
//! - [`fs`]: File system errors
//! - [`git`]: Git query errors
//! - [`guard`]: Managed file guard errors
//!
//! Structural problems inside a bundle document are not errors in this sense:
//! they are collected as plain strings by [`crate::bundles::validate`].

pub mod bundle;
pub mod fs;
pub mod git;
pub mod guard;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tmplguard operations
#[derive(Error, Diagnostic, Debug)]
pub enum GuardError {
    // Managed file errors
    #[error("Failed to read managed files manifest: {path}: {reason}")]
    #[diagnostic(
        code(tmplguard::manifest::read_failed),
        help("The manifest is optional; remove it or fix its permissions")
    )]
    ManifestReadFailed { path: String, reason: String },

    #[error("{count} managed file(s) modified")]
    #[diagnostic(
        code(tmplguard::managed::modified),
        help("Exclude the files in the template configuration or commit with --no-verify during a sync")
    )]
    ManagedFilesModified { count: usize },

    // Bundle document errors
    #[error("Template bundles file not found: {path}")]
    #[diagnostic(code(tmplguard::bundles::not_found))]
    BundlesNotFound { path: String },

    #[error("Failed to read template bundles file {path}: {reason}")]
    #[diagnostic(code(tmplguard::bundles::read_failed))]
    BundlesReadFailed { path: String, reason: String },

    #[error("Invalid YAML: {reason}")]
    #[diagnostic(code(tmplguard::bundles::parse_failed))]
    BundlesParseFailed { reason: String },

    #[error("Template bundles document does not match the bundle schema: {reason}")]
    #[diagnostic(code(tmplguard::bundles::schema_mismatch))]
    BundleSchemaMismatch { reason: String },

    #[error("Template bundles file is empty")]
    #[diagnostic(code(tmplguard::bundles::empty))]
    BundlesEmpty,

    #[error("Template bundles validation failed with {count} error(s)")]
    #[diagnostic(code(tmplguard::bundles::validation_failed))]
    BundleValidationFailed { count: usize },

    // Git errors
    #[error("Failed to open repository at '{path}': {reason}")]
    #[diagnostic(
        code(tmplguard::git::open_failed),
        help("Run tmplguard from within a git repository or pass --workspace")
    )]
    GitOpenFailed { path: String, reason: String },

    #[error("Git query failed for '{path}': {reason}")]
    #[diagnostic(code(tmplguard::git::query_failed))]
    GitQueryFailed { path: String, reason: String },

    #[error("Failed to resolve git ref '{git_ref}': {reason}")]
    #[diagnostic(code(tmplguard::git::ref_resolve_failed))]
    GitRefResolveFailed { git_ref: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(tmplguard::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(tmplguard::fs::io_error))]
    IoError { message: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GuardError>;
