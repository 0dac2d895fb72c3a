//! Structured logging setup
//!
//! Both binaries log through `tracing` to stderr so that stdout stays free for
//! command output such as `describe`.

use std::io::{self, IsTerminal};

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::error::{Result, config_invalid};

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Console,
    Json,
}

impl LogFormat {
    /// Parse a format name as found in the environment.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "console" | "" => Ok(LogFormat::Console),
            "json" => Ok(LogFormat::Json),
            other => Err(config_invalid(format!(
                "unknown log format '{other}', expected console or json"
            ))),
        }
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| config_invalid(format!("invalid log level '{level}': {e}")))?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Console => Box::new(builder.compact().finish()),
    };

    // A subscriber installed earlier (tests, embedding hosts) wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
