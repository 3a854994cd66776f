//! Configuration for tmplguard
//!
//! This module contains:
//! - `bundle` - Typed model of the template bundles document
//! - `env` - CI environment detection
//! - `guard` - Managed file guard settings

pub mod bundle;
pub mod env;
pub mod guard;

// Re-export commonly used types
pub use bundle::BundleDocument;
pub use env::CiEnvironment;
pub use guard::{DetectionStrategy, GuardConfig, QueryErrorPolicy};

/// Default location of the managed files manifest, relative to the workspace
pub const DEFAULT_MANIFEST_PATH: &str = ".rhiza/history";

/// Default location of the template bundles document, relative to the workspace
pub const DEFAULT_BUNDLES_PATH: &str = ".rhiza/template-bundles.yml";
