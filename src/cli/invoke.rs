use clap::Parser;

/// Arguments for the invoke command
#[derive(Parser, Debug)]
#[command(
    disable_help_flag = true,
    after_help = "EXAMPLES:\n  \
                   Run monitoring:\n    elementary_extension invoke monitor\n\n\
                   Pass extra edr flags:\n    elementary_extension invoke monitor --group-by table\n\n\
                   Show edr help (no flags are injected):\n    elementary_extension invoke monitor --help"
)]
pub struct InvokeArgs {
    /// edr command to run (e.g. monitor, report)
    #[arg(allow_hyphen_values = true)]
    pub command_name: Option<String>,

    /// Arguments passed to edr before the configured flags
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
