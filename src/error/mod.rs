//! Error types and handling for the elementary extension
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`process`]: Subprocess errors
//! - [`deploy`]: Template deployment errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod deploy;
pub mod fs;
pub mod process;

pub use config::invalid as config_invalid;
pub use deploy::{precondition_failed, profile_not_found};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use process::{process_failed, spawn_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Exit code used for every failure that does not come from a child process.
pub const GENERIC_FAILURE_CODE: i32 = 1;

/// Main error type for extension operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExtensionError {
    // Process errors
    #[error("Command `{command}` exited with code {code}")]
    #[diagnostic(
        code(elementary_ext::process::failed),
        help("See the captured output of the command for details")
    )]
    ProcessFailed {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to start `{command}`: {reason}")]
    #[diagnostic(
        code(elementary_ext::process::spawn_failed),
        help("Check that the binary is installed and on PATH, or set ELEMENTARY_EXT_BIN")
    )]
    SpawnFailed { command: String, reason: String },

    // Deployment errors
    #[error("No bundled profile matches type '{type_tag}'")]
    #[diagnostic(
        code(elementary_ext::deploy::profile_not_found),
        help("Set ELEMENTARY_EXT_TYPE to one of: {available}")
    )]
    ProfileNotFound { type_tag: String, available: String },

    #[error("Precondition failed for {operation}: {reason}")]
    #[diagnostic(
        code(elementary_ext::deploy::precondition_failed),
        help("Run `elementary_extension initialize` first")
    )]
    PreconditionFailed { operation: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(elementary_ext::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to serialize {what}: {reason}")]
    #[diagnostic(code(elementary_ext::config::serialize_failed))]
    SerializeFailed { what: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(elementary_ext::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(elementary_ext::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(elementary_ext::fs::io_error))]
    IoError { message: String },
}

impl ExtensionError {
    /// Process exit code the binaries terminate with for this error.
    ///
    /// Child failures propagate the child's own code unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtensionError::ProcessFailed { code, .. } => *code,
            _ => GENERIC_FAILURE_CODE,
        }
    }
}

impl From<std::io::Error> for ExtensionError {
    fn from(err: std::io::Error) -> Self {
        ExtensionError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ExtensionError {
    fn from(err: serde_yaml::Error) -> Self {
        ExtensionError::SerializeFailed {
            what: "yaml".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExtensionError {
    fn from(err: serde_json::Error) -> Self {
        ExtensionError::SerializeFailed {
            what: "json".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ExtensionError>;
