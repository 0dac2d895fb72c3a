//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - invoke: Invoke command arguments
//! - describe: Describe command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

use crate::config::env;
use crate::logging::{DEFAULT_LOG_LEVEL, LogFormat};

pub mod completions;
pub mod describe;
pub mod invoke;

pub use completions::CompletionsArgs;
pub use describe::DescribeArgs;
pub use invoke::InvokeArgs;

/// elementary_extension - Meltano extension for the elementary data observability CLI
#[derive(Parser, Debug)]
#[command(
    name = "elementary_extension",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Meltano extension wrapping the elementary (edr) CLI",
    long_about = "Deploys elementary profiles into a dbt project and runs `edr` with flags \
                  derived from the ELEMENTARY_* environment settings.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  elementary_extension initialize                  \x1b[90m# Deploy project and profile templates\x1b[0m\n   \
                  elementary_extension invoke monitor              \x1b[90m# Run edr monitor with configured flags\x1b[0m\n   \
                  elementary_extension monitor-report              \x1b[90m# Generate the HTML report\x1b[0m\n   \
                  elementary_extension monitor-send-report         \x1b[90m# Send the report to Slack\x1b[0m\n   \
                  elementary_extension describe --format json      \x1b[90m# Describe extension commands\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Log filter (e.g. info, debug, elementary_ext=trace)
    #[arg(long, global = true, env = env::LOG_LEVEL, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Log output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = env::LOG_FORMAT,
        default_value_t = LogFormat::Console
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the project template and the configured profile
    Initialize,

    /// Invoke edr with configuration-derived flags
    Invoke(InvokeArgs),

    /// Describe the commands this extension exposes
    Describe(DescribeArgs),

    /// Generate the elementary HTML report
    #[command(name = "monitor-report")]
    MonitorReport,

    /// Send the elementary report to Slack
    #[command(name = "monitor-send-report")]
    MonitorSendReport,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
