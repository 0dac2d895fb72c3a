//! File system errors

use std::path::Path;

use super::ExtensionError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: &std::io::Error) -> ExtensionError {
    ExtensionError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> ExtensionError {
    ExtensionError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ExtensionError {
    ExtensionError::IoError {
        message: message.into(),
    }
}
