//! elementary_extension - extension commands for the elementary (edr) CLI
//!
//! Selects one operation, runs it against a configuration snapshot built from
//! the environment and exits with the operation's exit code.

use clap::Parser;

use elementary_ext::cli::{Cli, Commands};
use elementary_ext::commands::{self, helpers::load_config};
use elementary_ext::error::Result;
use elementary_ext::logging;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Initialize => commands::initialize::run(&load_config()?),
        Commands::Invoke(args) => commands::invoke::run(&load_config()?, &args),
        Commands::Describe(args) => commands::describe::run(&args),
        Commands::MonitorReport => commands::monitor::run_report(&load_config()?),
        Commands::MonitorSendReport => commands::monitor::run_send_report(&load_config()?),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level, cli.log_format) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(cli) {
        std::process::exit(e.exit_code());
    }
}
