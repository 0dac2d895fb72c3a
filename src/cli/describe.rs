use clap::Parser;

use crate::describe::DescribeFormat;

/// Arguments for the describe command
#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = DescribeFormat::Yaml)]
    pub format: DescribeFormat,
}
