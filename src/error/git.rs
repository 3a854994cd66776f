//! Git query errors

use super::GuardError;

/// Creates a repository open failed error
pub fn open_failed(path: impl Into<String>, reason: impl Into<String>) -> GuardError {
    GuardError::GitOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a per-path query failed error
pub fn query_failed(path: impl Into<String>, reason: impl Into<String>) -> GuardError {
    GuardError::GitQueryFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a ref resolution failed error
pub fn ref_resolve_failed(git_ref: impl Into<String>, reason: impl Into<String>) -> GuardError {
    GuardError::GitRefResolveFailed {
        git_ref: git_ref.into(),
        reason: reason.into(),
    }
}
