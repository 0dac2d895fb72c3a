//! elementary-ext - Meltano extension for the elementary data observability CLI
//!
//! Deploys bundled dbt profiles for elementary into a project and runs the
//! `edr` binary with flags derived from `ELEMENTARY_*` environment settings,
//! propagating its exit code to the host.

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod deploy;
pub mod describe;
pub mod error;
pub mod extension;
pub mod logging;
pub mod process;

#[cfg(test)]
mod temp;

pub use config::ExtensionConfig;
pub use error::{ExtensionError, Result};
pub use extension::{ElementaryExtension, Extension};
