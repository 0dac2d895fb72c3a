//! Static description of the commands this extension exposes to its host

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const EXTENSION_COMMAND: &str = "elementary_extension";
pub const INVOKER_COMMAND: &str = "elementary_invoker";

/// Subcommands of `elementary_extension` the host may call.
pub const EXTENSION_SUBCOMMANDS: &[&str] = &[
    "describe",
    "initialize",
    "invoke",
    "monitor-report",
    "monitor-send-report",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DescribedCommand {
    Extension {
        name: String,
        description: String,
        commands: Vec<String>,
    },
    Invoker {
        name: String,
        description: String,
    },
}

impl DescribedCommand {
    pub fn name(&self) -> &str {
        match self {
            DescribedCommand::Extension { name, .. } | DescribedCommand::Invoker { name, .. } => {
                name
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Describe {
    pub commands: Vec<DescribedCommand>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DescribeFormat {
    #[default]
    Yaml,
    Json,
}

impl Describe {
    /// The two command groups: extension commands and the pass-through invoker.
    pub fn elementary() -> Self {
        Self {
            commands: vec![
                DescribedCommand::Extension {
                    name: EXTENSION_COMMAND.to_string(),
                    description: "extension commands".to_string(),
                    commands: EXTENSION_SUBCOMMANDS
                        .iter()
                        .map(|c| (*c).to_string())
                        .collect(),
                },
                DescribedCommand::Invoker {
                    name: INVOKER_COMMAND.to_string(),
                    description: "pass through invoker".to_string(),
                },
            ],
        }
    }

    pub fn render(&self, format: DescribeFormat) -> Result<String> {
        Ok(match format {
            DescribeFormat::Yaml => serde_yaml::to_string(self)?,
            DescribeFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}
