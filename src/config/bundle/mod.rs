//! Template bundles document (template-bundles.yml)
//!
//! Typed view of the document, limited to what expectations are checked
//! against. Conversion only succeeds on documents that already passed
//! [`crate::bundles::validate`]; structural problems are reported by the
//! validator, not by serde. Keys not modelled here are ignored.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Result, bundle};

/// Parsed template bundles document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BundleDocument {
    /// Document format version
    pub version: String,

    /// Bundles keyed by name, in document order
    pub bundles: IndexMap<String, BundleConfig>,
}

/// A single bundle definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BundleConfig {
    pub files: Vec<String>,

    /// Bundles that must be installed alongside this one
    #[serde(default)]
    pub requires: Vec<String>,

    /// Mandatory bundle, always part of a distribution
    #[serde(default)]
    pub required: bool,
}

impl BundleDocument {
    /// Convert an already parsed YAML value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_yaml::from_value(value).map_err(|e| bundle::schema_mismatch(e.to_string()))
    }

    /// Parse from a YAML string
    #[cfg(test)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| bundle::schema_mismatch(e.to_string()))
    }

    /// Bundle by name
    pub fn bundle(&self, name: &str) -> Option<&BundleConfig> {
        self.bundles.get(name)
    }

    /// Names of bundles flagged `required: true`, in document order
    pub fn required_bundles(&self) -> Vec<&str> {
        self.bundles
            .iter()
            .filter(|(_, config)| config.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether `bundle` lists `dependency` under `requires`
    pub fn depends_on(&self, bundle: &str, dependency: &str) -> bool {
        self.bundle(bundle)
            .is_some_and(|config| config.requires.iter().any(|dep| dep == dependency))
    }

    /// Total number of files across all bundles
    pub fn file_count(&self) -> usize {
        self.bundles.values().map(|config| config.files.len()).sum()
    }
}
