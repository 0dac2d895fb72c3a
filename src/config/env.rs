//! Environment variable names and value parsing

use crate::error::{Result, config_invalid};

pub const EDR_BIN: &str = "ELEMENTARY_EXT_BIN";
pub const DBT_BIN: &str = "ELEMENTARY_EXT_DBT_BIN";
pub const PROJECT_DIR: &str = "ELEMENTARY_PROJECT_DIR";
pub const PROFILES_DIR: &str = "ELEMENTARY_PROFILES_DIR";
pub const CONFIG_DIR: &str = "ELEMENTARY_CONFIG_DIR";
pub const EXT_TYPE: &str = "ELEMENTARY_EXT_TYPE";
/// Older projects share the dbt extension's type setting.
pub const DBT_EXT_TYPE: &str = "DBT_EXT_TYPE";
pub const FILE_PATH: &str = "ELEMENTARY_FILE_PATH";
pub const SLACK_CHANNEL_NAME: &str = "ELEMENTARY_SLACK_CHANNEL_NAME";
pub const SLACK_TOKEN: &str = "ELEMENTARY_SLACK_CHANNEL_TOKEN";
pub const SKIP_PRE_INVOKE: &str = "ELEMENTARY_EXT_SKIP_PRE_INVOKE";
pub const BUNDLE_DIR: &str = "ELEMENTARY_EXT_BUNDLE_DIR";

pub const DAYS_BACK: &str = "ELEMENTARY_DAYS_BACK";
pub const TIMEZONE: &str = "ELEMENTARY_TIMEZONE";
pub const DBT_QUOTING: &str = "ELEMENTARY_DBT_QUOTING";
pub const DISABLE_SAMPLES: &str = "ELEMENTARY_DISABLE_SAMPLES";
pub const ENV: &str = "ELEMENTARY_ENV";
pub const FULL_REFRESH_DBT_PACKAGE: &str = "ELEMENTARY_FULL_REFRESH_DBT_PACKAGE";

pub const LOG_LEVEL: &str = "ELEMENTARY_EXT_LOG_LEVEL";
pub const LOG_FORMAT: &str = "ELEMENTARY_EXT_LOG_FORMAT";

/// Parse a boolean setting the way Meltano renders them into the environment.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(config_invalid(format!(
            "{key} must be a boolean (true/false), got '{other}'"
        ))),
    }
}

pub fn parse_days_back(value: &str) -> Result<u32> {
    value.trim().parse::<u32>().map_err(|e| {
        config_invalid(format!(
            "{DAYS_BACK} must be a non-negative integer, got '{value}': {e}"
        ))
    })
}
