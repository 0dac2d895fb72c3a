//! Describe command implementation

use std::io::Write;

use tracing::error;

use crate::cli::DescribeArgs;
use crate::describe::Describe;
use crate::error::Result;

/// Print the extension description to stdout
pub fn run(args: &DescribeArgs) -> Result<()> {
    write_description(args).inspect_err(|e| {
        error!(operation = "describe", error = %e, "describe failed");
    })
}

fn write_description(args: &DescribeArgs) -> Result<()> {
    let rendered = Describe::elementary().render(args.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
