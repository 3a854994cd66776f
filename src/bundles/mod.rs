//! Template bundle document validation
//!
//! This module handles:
//! - Loading the bundles document ([`load`])
//! - Structural and referential checks ([`rules`])
//! - Repository-specific expectations on the typed model ([`expectations`])
//!
//! Validation is a pipeline of pure rules over an immutable document. All
//! problems are collected into a [`ValidationReport`] instead of stopping at
//! the first one.

pub mod expectations;
pub mod load;
pub mod rules;

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

pub use expectations::Expectations;
pub use load::load;
pub use rules::{validate_bundle, validate_examples, validate_metadata, validate_top_level};

/// Outcome of validating a bundles document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// True when no problem was found
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Append problems found by a later stage
    pub fn extend(&mut self, errors: impl IntoIterator<Item = String>) {
        self.errors.extend(errors);
    }
}

/// Run every structural rule over a parsed document
///
/// A missing top-level field or a non-mapping `bundles` stops the pipeline,
/// since nothing further can be checked meaningfully.
pub fn validate(document: &Value) -> ValidationReport {
    let top_level = validate_top_level(document);
    if !top_level.is_empty() {
        return ValidationReport::from_errors(top_level);
    }

    let Some(bundles) = document.get("bundles").and_then(Value::as_mapping) else {
        return ValidationReport::from_errors(vec!["'bundles' must be a dictionary".to_string()]);
    };

    let known_names = rules::bundle_names(bundles);
    let mut errors = Vec::new();

    for (name, config) in bundles {
        errors.extend(validate_bundle(&rules::label(name), config, &known_names));
    }

    if let Some(examples) = document.get("examples") {
        errors.extend(validate_examples(examples, &known_names));
    }

    if let Some(metadata) = document.get("metadata") {
        errors.extend(validate_metadata(metadata, bundles));
    }

    debug!(bundles = bundles.len(), errors = errors.len(), "validated bundles document");
    ValidationReport::from_errors(errors)
}

/// Load and validate the document at `path`
///
/// Load failures become a single-entry report.
pub fn validate_file(path: &Path) -> (ValidationReport, Option<Value>) {
    match load(path) {
        Ok(document) => (validate(&document), Some(document)),
        Err(err) => (ValidationReport::from_errors(vec![err.to_string()]), None),
    }
}
