//! Initialize command implementation

use crate::config::ExtensionConfig;
use crate::error::Result;
use crate::extension::{ElementaryExtension, Extension};

/// Run initialize command
///
/// Deploys the project bundle and the profile selected by `ELEMENTARY_EXT_TYPE`.
/// An unknown type fails the command after the project bundle is in place.
pub fn run(config: &ExtensionConfig) -> Result<()> {
    let extension = ElementaryExtension::new(config)?;
    extension.initialize()?;
    Ok(())
}
