//! Subprocess errors

use super::ExtensionError;

/// Creates a process failure error carrying the child's exit code
pub fn process_failed(
    command: impl Into<String>,
    code: i32,
    stdout: impl Into<String>,
    stderr: impl Into<String>,
) -> ExtensionError {
    ExtensionError::ProcessFailed {
        command: command.into(),
        code,
        stdout: stdout.into(),
        stderr: stderr.into(),
    }
}

/// Creates a spawn failure error
pub fn spawn_failed(command: impl Into<String>, reason: impl Into<String>) -> ExtensionError {
    ExtensionError::SpawnFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
