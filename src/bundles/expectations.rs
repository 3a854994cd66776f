//! Expectations a particular repository places on its bundles document
//!
//! Not part of the general consistency contract: a template repository can
//! pin the bundles it ships and the dependency edges between them.

use crate::config::BundleDocument;

/// Repository-specific assertions over a validated document
#[derive(Debug, Clone, Default)]
pub struct Expectations {
    /// Bundles that must be defined
    pub bundles: Vec<String>,

    /// `(bundle, dependency)` pairs that must appear under `requires`
    pub requires: Vec<(String, String)>,

    /// Bundles that must be flagged `required: true`
    pub required: Vec<String>,
}

impl Expectations {
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty() && self.requires.is_empty() && self.required.is_empty()
    }

    /// Problems with `document`, one per unmet expectation
    pub fn check(&self, document: &BundleDocument) -> Vec<String> {
        let mut errors = Vec::new();

        for name in &self.bundles {
            if document.bundle(name).is_none() {
                errors.push(format!("Expected bundle '{name}' is not defined"));
            }
        }

        for (bundle, dependency) in &self.requires {
            if !document.depends_on(bundle, dependency) {
                errors.push(format!("Bundle '{bundle}' does not require '{dependency}'"));
            }
        }

        let required = document.required_bundles();
        for name in &self.required {
            if !required.contains(&name.as_str()) {
                errors.push(format!("Bundle '{name}' is not marked as required"));
            }
        }

        errors
    }
}

/// Parse a `bundle:dependency` edge given on the command line
pub fn parse_edge(input: &str) -> Result<(String, String), String> {
    match input.split_once(':') {
        Some((bundle, dependency)) if !bundle.is_empty() && !dependency.is_empty() => {
            Ok((bundle.to_string(), dependency.to_string()))
        }
        _ => Err(format!("expected BUNDLE:DEPENDENCY, got '{input}'")),
    }
}
