//! Bundles command implementation
//!
//! Validates the template bundles document and, once it is structurally
//! sound, the repository-specific expectations given on the command line.

use std::path::PathBuf;

use serde_yaml::Value;
use tracing::debug;

use crate::bundles::{Expectations, ValidationReport, validate_file};
use crate::cli::BundlesArgs;
use crate::common::path_normalizer::PathNormalizer;
use crate::config::BundleDocument;
use crate::error::{Result, bundle};
use crate::ui;

use super::helpers::resolve_workspace;

/// Run bundles command
pub fn run(workspace: Option<PathBuf>, args: &BundlesArgs) -> Result<()> {
    let workspace = resolve_workspace(workspace)?;
    let path = workspace.resolve(&args.file);

    ui::print_validation_banner(&PathNormalizer::to_normalized_str(&path));

    let (mut report, document) = validate_file(&path);
    let expectations = args.expectations();
    if let Some(document) = document.filter(|_| report.is_ok() && !expectations.is_empty()) {
        check_expectations(&mut report, document, &expectations);
    }

    ui::print_validation_report(&report);
    if report.is_ok() {
        Ok(())
    } else {
        Err(bundle::validation_failed(report.errors().len()))
    }
}

/// Append unmet expectations to a passing report
fn check_expectations(report: &mut ValidationReport, document: Value, expectations: &Expectations) {
    match BundleDocument::from_value(document) {
        Ok(document) => {
            debug!(
                version = %document.version,
                bundles = document.bundles.len(),
                files = document.file_count(),
                required = ?document.required_bundles(),
                "typed bundles document"
            );
            report.extend(expectations.check(&document));
        }
        Err(e) => report.extend([e.to_string()]),
    }
}
