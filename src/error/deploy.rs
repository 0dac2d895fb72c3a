//! Template deployment errors

use super::ExtensionError;

/// Creates a profile not found error listing the tags that do exist
pub fn profile_not_found(type_tag: impl Into<String>, available: &[impl AsRef<str>]) -> ExtensionError {
    let available = available
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    ExtensionError::ProfileNotFound {
        type_tag: type_tag.into(),
        available,
    }
}

/// Creates a precondition failure error
pub fn precondition_failed(
    operation: impl Into<String>,
    reason: impl Into<String>,
) -> ExtensionError {
    ExtensionError::PreconditionFailed {
        operation: operation.into(),
        reason: reason.into(),
    }
}
