//! Managed file guard errors

use super::GuardError;

/// Creates a manifest read failed error
pub fn manifest_read_failed(path: impl Into<String>, reason: impl Into<String>) -> GuardError {
    GuardError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a modified managed files error
pub fn modified(count: usize) -> GuardError {
    GuardError::ManagedFilesModified { count }
}
