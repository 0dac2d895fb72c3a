//! Invoke command implementation

use crate::cli::InvokeArgs;
use crate::config::ExtensionConfig;
use crate::error::Result;
use crate::extension::{ElementaryExtension, Extension};

/// Run invoke command: pre-invoke hook, then `edr <command> <args> <flags>`
pub fn run(config: &ExtensionConfig, args: &InvokeArgs) -> Result<()> {
    let extension = ElementaryExtension::new(config)?;
    let command_name = args.command_name.as_deref();

    extension.pre_invoke(command_name)?;
    extension.invoke(command_name, &args.args)?;
    Ok(())
}

/// Run the raw pass-through: pre-invoke hook keyed on the first argument,
/// then `edr <args>` with nothing injected
pub fn run_pass_through(config: &ExtensionConfig, args: &[String]) -> Result<()> {
    let extension = ElementaryExtension::new(config)?;

    extension.pre_invoke(args.first().map(String::as_str))?;
    extension.pass_through(args)?;
    Ok(())
}
