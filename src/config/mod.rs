//! Extension configuration
//!
//! [`ExtensionConfig`] is an immutable snapshot of every setting the extension
//! reads from its environment. It is built once at startup and passed by
//! reference to the deployer, the invokers and the command adapter.

pub mod env;

use std::path::PathBuf;

use crate::error::Result;

pub const DEFAULT_EDR_BIN: &str = "edr";
pub const DEFAULT_DBT_BIN: &str = "dbt";
pub const DEFAULT_PROJECT_DIR: &str = "transform";
pub const DEFAULT_EXT_TYPE: &str = "postgres";
pub const DEFAULT_FILE_PATH: &str = "utilities/elementary/report.html";

/// Optional `edr monitor` tuning flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorOptions {
    pub days_back: Option<u32>,
    pub timezone: Option<String>,
    pub dbt_quoting: Option<String>,
    pub disable_samples: bool,
    pub env: Option<String>,
    pub full_refresh_dbt_package: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfig {
    pub edr_bin: String,
    pub dbt_bin: String,
    pub project_dir: PathBuf,
    pub profiles_dir: PathBuf,
    /// Takes precedence over `profiles_dir` when building `edr` flags.
    pub config_dir: Option<PathBuf>,
    pub ext_type: String,
    pub file_path: PathBuf,
    pub slack_channel_name: String,
    pub slack_token: String,
    pub skip_pre_invoke: bool,
    /// On-disk template bundle replacing the one compiled into the binary.
    pub bundle_dir: Option<PathBuf>,
    pub monitor: MonitorOptions,
}

impl ExtensionConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let get_bool = |key: &str| -> Result<bool> {
            get(key).map_or(Ok(false), |value| env::parse_bool(key, &value))
        };

        let project_dir = get(env::PROJECT_DIR)
            .map_or_else(|| PathBuf::from(DEFAULT_PROJECT_DIR), PathBuf::from);
        let profiles_dir = get(env::PROFILES_DIR)
            .map_or_else(|| project_dir.join("profiles"), PathBuf::from);

        let monitor = MonitorOptions {
            days_back: get(env::DAYS_BACK)
                .map(|value| env::parse_days_back(&value))
                .transpose()?,
            timezone: get(env::TIMEZONE),
            dbt_quoting: get(env::DBT_QUOTING),
            disable_samples: get_bool(env::DISABLE_SAMPLES)?,
            env: get(env::ENV),
            full_refresh_dbt_package: get_bool(env::FULL_REFRESH_DBT_PACKAGE)?,
        };

        Ok(Self {
            edr_bin: get(env::EDR_BIN).unwrap_or_else(|| DEFAULT_EDR_BIN.to_string()),
            dbt_bin: get(env::DBT_BIN).unwrap_or_else(|| DEFAULT_DBT_BIN.to_string()),
            project_dir,
            profiles_dir,
            config_dir: get(env::CONFIG_DIR).map(PathBuf::from),
            ext_type: get(env::EXT_TYPE)
                .or_else(|| get(env::DBT_EXT_TYPE))
                .unwrap_or_else(|| DEFAULT_EXT_TYPE.to_string()),
            file_path: get(env::FILE_PATH)
                .map_or_else(|| PathBuf::from(DEFAULT_FILE_PATH), PathBuf::from),
            slack_channel_name: get(env::SLACK_CHANNEL_NAME).unwrap_or_default(),
            slack_token: get(env::SLACK_TOKEN).unwrap_or_default(),
            skip_pre_invoke: get_bool(env::SKIP_PRE_INVOKE)?,
            bundle_dir: get(env::BUNDLE_DIR).map(PathBuf::from),
            monitor,
        })
    }

    /// Configuration with every default applied.
    pub fn with_defaults() -> Self {
        let project_dir = PathBuf::from(DEFAULT_PROJECT_DIR);
        Self {
            edr_bin: DEFAULT_EDR_BIN.to_string(),
            dbt_bin: DEFAULT_DBT_BIN.to_string(),
            profiles_dir: project_dir.join("profiles"),
            project_dir,
            config_dir: None,
            ext_type: DEFAULT_EXT_TYPE.to_string(),
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            slack_channel_name: String::new(),
            slack_token: String::new(),
            skip_pre_invoke: false,
            bundle_dir: None,
            monitor: MonitorOptions::default(),
        }
    }
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
