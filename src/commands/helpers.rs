//! Command helper utilities

use tracing::error;

use crate::config::ExtensionConfig;
use crate::error::Result;

/// Load the configuration snapshot, logging why it could not be built.
pub fn load_config() -> Result<ExtensionConfig> {
    ExtensionConfig::from_env().inspect_err(|e| {
        error!(operation = "configure", error = %e, "invalid extension configuration");
    })
}
