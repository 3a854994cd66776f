//! Template bundle document errors

use super::GuardError;

/// Creates a bundles file not found error
pub fn not_found(path: impl Into<String>) -> GuardError {
    GuardError::BundlesNotFound { path: path.into() }
}

/// Creates a bundles file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> GuardError {
    GuardError::BundlesReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid YAML error
pub fn parse_failed(reason: impl Into<String>) -> GuardError {
    GuardError::BundlesParseFailed {
        reason: reason.into(),
    }
}

/// Creates an error for a document that does not fit the typed model
pub fn schema_mismatch(reason: impl Into<String>) -> GuardError {
    GuardError::BundleSchemaMismatch {
        reason: reason.into(),
    }
}

/// Creates a validation failed error carrying the number of reported problems
pub fn validation_failed(count: usize) -> GuardError {
    GuardError::BundleValidationFailed { count }
}
