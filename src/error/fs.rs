//! File system errors

use super::GuardError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> GuardError {
    GuardError::IoError {
        message: message.into(),
    }
}
