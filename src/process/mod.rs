//! Subprocess invocation
//!
//! [`Invoker`] runs an external binary (`edr`, `dbt`) with an ordered argument
//! list, waits for it to finish and turns a non-zero exit into
//! [`ExtensionError::ProcessFailed`] carrying the child's exit code. Nothing
//! is retried.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Output};

use tracing::{debug, error, info, warn};

use crate::error::{ExtensionError, Result, process_failed, spawn_failed};

/// Tracing target for subprocess output and failures.
pub const INVOKER_TARGET: &str = "elementary_ext::invoker";

/// Captured result of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs one external binary.
#[derive(Debug, Clone)]
pub struct Invoker {
    bin: String,
    cwd: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl Invoker {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            cwd: None,
            env: Vec::new(),
        }
    }

    /// Run the child in `cwd` instead of the current directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Add an environment variable to the child's environment.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Human-readable command line used in log records and errors.
    pub fn display_command(&self, args: &[String]) -> String {
        std::iter::once(self.bin.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the binary and capture its output.
    ///
    /// Fails with [`ExtensionError::ProcessFailed`] when the child exits
    /// non-zero and with [`ExtensionError::SpawnFailed`] when it cannot start.
    pub fn run(&self, args: &[String]) -> Result<InvocationResult> {
        let command_line = self.display_command(args);
        let mut command = Command::new(&self.bin);
        command.args(args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }

        debug!(
            target: INVOKER_TARGET,
            command = %command_line,
            cwd = ?self.cwd,
            "spawning process"
        );

        let output = command
            .output()
            .map_err(|e| spawn_failed(&command_line, e.to_string()))?;

        into_result(&command_line, output)
    }

    /// Run the binary and re-emit every output line as a log record.
    ///
    /// Stdout lines are logged at `info`, stderr lines at `warn`. A failing
    /// child's output is logged the same way before the error is returned.
    pub fn run_and_log(&self, args: &[String]) -> Result<InvocationResult> {
        let command_line = self.display_command(args);
        match self.run(args) {
            Ok(result) => {
                log_lines(&command_line, &result.stdout, &result.stderr);
                Ok(result)
            }
            Err(err) => {
                if let ExtensionError::ProcessFailed { stdout, stderr, .. } = &err {
                    log_lines(&command_line, stdout, stderr);
                }
                Err(err)
            }
        }
    }
}

fn into_result(command_line: &str, output: Output) -> Result<InvocationResult> {
    let code = exit_code(output.status);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(process_failed(command_line, code, stdout, stderr));
    }

    Ok(InvocationResult {
        code,
        stdout,
        stderr,
    })
}

/// Exit code of a finished child. Signals map to `128 + signal` on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    crate::error::GENERIC_FAILURE_CODE
}

fn log_lines(command_line: &str, stdout: &str, stderr: &str) {
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        info!(target: INVOKER_TARGET, command = %command_line, "{line}");
    }
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        warn!(target: INVOKER_TARGET, command = %command_line, "{line}");
    }
}

/// Emit the structured error record for a failed invocation.
///
/// Callers log through here before terminating with [`ExtensionError::exit_code`].
pub fn log_subprocess_error(command: &str, err: &ExtensionError, message: &str) {
    match err {
        ExtensionError::ProcessFailed { code, stderr, .. } => {
            error!(
                target: INVOKER_TARGET,
                command,
                exit_code = *code,
                stderr = %stderr.trim(),
                "{message}"
            );
        }
        other => {
            error!(
                target: INVOKER_TARGET,
                command,
                exit_code = other.exit_code(),
                error = %other,
                "{message}"
            );
        }
    }
}
