//! Monitor report commands

use crate::config::ExtensionConfig;
use crate::error::Result;
use crate::extension::{ElementaryExtension, Extension};

/// Run `edr monitor report` into the configured report file
pub fn run_report(config: &ExtensionConfig) -> Result<()> {
    let extension = ElementaryExtension::new(config)?;
    extension.pre_invoke(Some("monitor"))?;
    extension.monitor_report()?;
    Ok(())
}

/// Run `edr monitor send-report` to the configured Slack channel
pub fn run_send_report(config: &ExtensionConfig) -> Result<()> {
    let extension = ElementaryExtension::new(config)?;
    extension.pre_invoke(Some("monitor"))?;
    extension.monitor_send_report()?;
    Ok(())
}
