//! `edr` flag assembly from configuration

use crate::config::ExtensionConfig;

pub const HELP_FLAG: &str = "--help";

/// Arguments for `edr <command_name> ...`, excluding the command name.
///
/// Configuration flags are appended after `args` in a fixed order, and only
/// when the request is not a bare `--help`:
/// `--config-dir` (or `--profiles-dir` when no config dir is set),
/// `--days-back`, `--timezone`, `--dbt-quoting`, `--disable-samples`,
/// `--env`, `--full-refresh-dbt-package`.
pub fn build_invoke_args(
    config: &ExtensionConfig,
    command_name: Option<&str>,
    args: &[String],
) -> Vec<String> {
    let mut out = args.to_vec();
    if is_help_request(command_name, args) {
        return out;
    }

    match &config.config_dir {
        Some(config_dir) => out.push(format!("--config-dir={}", config_dir.display())),
        None => out.push(format!("--profiles-dir={}", config.profiles_dir.display())),
    }

    let monitor = &config.monitor;
    if let Some(days_back) = monitor.days_back {
        out.push(format!("--days-back={days_back}"));
    }
    if let Some(timezone) = &monitor.timezone {
        out.push(format!("--timezone={timezone}"));
    }
    if let Some(quoting) = &monitor.dbt_quoting {
        out.push(format!("--dbt-quoting={quoting}"));
    }
    if monitor.disable_samples {
        out.push("--disable-samples=true".to_string());
    }
    if let Some(env) = &monitor.env {
        out.push(format!("--env={env}"));
    }
    if monitor.full_refresh_dbt_package {
        out.push("--full-refresh-dbt-package=true".to_string());
    }

    out
}

fn is_help_request(command_name: Option<&str>, args: &[String]) -> bool {
    command_name == Some(HELP_FLAG) || args.first().is_some_and(|a| a == HELP_FLAG)
}
