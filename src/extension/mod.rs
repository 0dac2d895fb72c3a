//! The elementary extension
//!
//! [`Extension`] is the capability set the host relies on. The CLI calls
//! [`Extension::pre_invoke`] before anything that launches `edr`, then exactly
//! one operation.
//!
//! [`ElementaryExtension`] implements it on top of [`TemplateDeployer`] and two
//! [`Invoker`]s: one for `edr`, one for the `dbt` pre-invoke steps.

pub mod args;

use tracing::{debug, error, info};

use crate::config::ExtensionConfig;
use crate::deploy::{DeployReport, TemplateDeployer};
use crate::describe::Describe;
use crate::error::{Result, io_error, precondition_failed};
use crate::process::{InvocationResult, Invoker, log_subprocess_error};

pub use args::{HELP_FLAG, build_invoke_args};

/// Commands that are never preceded by the pre-invoke hook.
pub const PRE_INVOKE_EXEMPT: &[&str] = &["deps", "clean"];

/// Operations a host can ask of an extension.
pub trait Extension {
    /// Hook run before `invoke_name` is invoked.
    fn pre_invoke(&self, invoke_name: Option<&str>) -> Result<()>;

    /// First-time setup of the working directories.
    fn initialize(&self) -> Result<DeployReport>;

    /// Invoke the wrapped CLI with configuration-derived flags appended.
    fn invoke(&self, command_name: Option<&str>, args: &[String]) -> Result<InvocationResult>;

    fn describe(&self) -> Describe;

    /// Forward `args` to the wrapped CLI unchanged.
    fn pass_through(&self, args: &[String]) -> Result<InvocationResult>;
}

pub struct ElementaryExtension<'a> {
    config: &'a ExtensionConfig,
    edr: Invoker,
    dbt: Invoker,
    deployer: TemplateDeployer,
}

impl<'a> ElementaryExtension<'a> {
    pub fn new(config: &'a ExtensionConfig) -> Result<Self> {
        // dbt resolves DBT_PROFILES_DIR against its own working directory
        let profiles_dir = std::path::absolute(&config.profiles_dir).map_err(|e| {
            let err = io_error(format!(
                "Failed to resolve {}: {e}",
                config.profiles_dir.display()
            ));
            error!(operation = "configure", error = %err, "cannot resolve profiles directory");
            err
        })?;

        Ok(Self {
            config,
            edr: Invoker::new(&config.edr_bin),
            dbt: Invoker::new(&config.dbt_bin)
                .with_cwd(&config.project_dir)
                .with_env("DBT_PROFILES_DIR", profiles_dir.display().to_string()),
            deployer: TemplateDeployer::for_bundle_dir(config.bundle_dir.as_deref()),
        })
    }

    /// Render the HTML report to the configured file path.
    pub fn monitor_report(&self) -> Result<InvocationResult> {
        let config = self.config;

        if !config.file_path.is_file() {
            return Err(log_precondition(
                "monitor_report",
                format!("report file {} does not exist", config.file_path.display()),
            ));
        }
        if !config.profiles_dir.is_dir() {
            return Err(log_precondition(
                "monitor_report",
                format!(
                    "profiles directory {} does not exist",
                    config.profiles_dir.display()
                ),
            ));
        }

        let args = vec![
            "report".to_string(),
            format!("--profiles-dir={}", config.profiles_dir.display()),
            format!("--file-path={}", config.file_path.display()),
        ];
        self.run_edr(Some("monitor"), &args)
    }

    /// Send the report to the configured Slack channel.
    pub fn monitor_send_report(&self) -> Result<InvocationResult> {
        let config = self.config;
        let args = vec![
            "send-report".to_string(),
            format!("--profiles-dir={}", config.profiles_dir.display()),
            format!("--slack-token={}", config.slack_token),
            format!("--slack-channel-name={}", config.slack_channel_name),
        ];
        self.run_edr(Some("monitor"), &args)
    }

    fn run_edr(&self, command_name: Option<&str>, args: &[String]) -> Result<InvocationResult> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.extend(command_name.map(str::to_string));
        full.extend(args.iter().cloned());

        self.edr.run_and_log(&full).inspect_err(|err| {
            let label = match command_name {
                Some(name) => format!("elementary {name}"),
                None => "elementary".to_string(),
            };
            log_subprocess_error(&label, err, "elementary invocation failed");
        })
    }

    fn run_dbt_step(&self, step: &str) -> Result<()> {
        info!("Extension executing `dbt {step}`...");
        self.dbt
            .run_and_log(&[step.to_string()])
            .map(|_| ())
            .inspect_err(|err| {
                log_subprocess_error(
                    &format!("dbt {step}"),
                    err,
                    &format!("pre invoke step of `dbt {step}` failed"),
                );
            })
    }
}

impl Extension for ElementaryExtension<'_> {
    fn pre_invoke(&self, invoke_name: Option<&str>) -> Result<()> {
        if self.config.skip_pre_invoke {
            debug!("skipping pre-invoke as ELEMENTARY_EXT_SKIP_PRE_INVOKE is set");
            return Ok(());
        }

        if invoke_name.is_some_and(|name| PRE_INVOKE_EXEMPT.contains(&name)) {
            debug!("skipping pre-invoke as command being invoked is deps or clean");
            return Ok(());
        }

        self.run_dbt_step("clean")?;
        self.run_dbt_step("deps")
    }

    fn initialize(&self) -> Result<DeployReport> {
        let config = self.config;
        let report = self
            .deployer
            .deploy(&config.project_dir, &config.profiles_dir, &config.ext_type)
            .inspect_err(|err| {
                error!(
                    operation = "initialize",
                    type_tag = %config.ext_type,
                    error = %err,
                    "initialization failed"
                );
            })?;

        info!(
            project_dir = %report.project_dir.display(),
            profiles_dir = %report.profiles_dir.display(),
            type_tag = %report.type_tag,
            "elementary extension initialized"
        );
        Ok(report)
    }

    fn invoke(&self, command_name: Option<&str>, args: &[String]) -> Result<InvocationResult> {
        let full_args = build_invoke_args(self.config, command_name, args);
        self.run_edr(command_name, &full_args)
    }

    fn describe(&self) -> Describe {
        Describe::elementary()
    }

    fn pass_through(&self, args: &[String]) -> Result<InvocationResult> {
        self.run_edr(None, args)
    }
}

fn log_precondition(operation: &str, reason: String) -> crate::error::ExtensionError {
    error!(operation, reason = %reason, "precondition failed");
    precondition_failed(operation, reason)
}

#[cfg(test)]
mod tests;
