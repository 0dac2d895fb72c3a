//! Configuration errors

use super::ExtensionError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> ExtensionError {
    ExtensionError::ConfigInvalid {
        message: message.into(),
    }
}
