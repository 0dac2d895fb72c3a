use super::*;
use crate::config::MonitorOptions;
use crate::error::ExtensionError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Harness {
    temp: TempDir,
    log: PathBuf,
}

impl Harness {
    fn new() -> Self {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let log = temp.path().join("calls.log");
        Self { temp, log }
    }

    fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Fake binary that records `<label> <args>` and exits with `code`.
    #[cfg(unix)]
    fn fake_bin(&self, label: &str, code: i32) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(label);
        let script = format!(
            "#!/bin/sh\necho \"{label} $*\" >> \"{}\"\necho \"{label} says hi\"\nexit {code}\n",
            self.log.display()
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn config(&self) -> ExtensionConfig {
        let project_dir = self.path().join("transform");
        ExtensionConfig {
            profiles_dir: project_dir.join("profiles"),
            file_path: self.path().join("report.html"),
            project_dir,
            skip_pre_invoke: true,
            ..ExtensionConfig::default()
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn test_unresolvable_profiles_dir_is_an_error() {
    let config = ExtensionConfig {
        profiles_dir: PathBuf::new(),
        ..ExtensionConfig::default()
    };
    let err = ElementaryExtension::new(&config).err().unwrap();
    assert!(matches!(err, ExtensionError::IoError { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_describe_exposes_both_groups() {
    let config = ExtensionConfig::default();
    let ext = ElementaryExtension::new(&config).unwrap();
    assert_eq!(ext.describe().commands.len(), 2);
}

#[test]
fn test_initialize_deploys_configured_type() {
    let h = Harness::new();
    let config = ExtensionConfig {
        ext_type: "duckdb".to_string(),
        ..h.config()
    };
    let ext = ElementaryExtension::new(&config).unwrap();

    let report = ext.initialize().unwrap();

    assert_eq!(report.type_tag, "duckdb");
    let profiles = fs::read_to_string(config.profiles_dir.join("profiles.yml")).unwrap();
    assert!(profiles.contains("type: duckdb"));
    assert!(config.project_dir.join("elementary/config.yml").is_file());
}

#[test]
fn test_initialize_fails_fast_on_unknown_type() {
    let h = Harness::new();
    let config = ExtensionConfig {
        ext_type: "oracle".to_string(),
        ..h.config()
    };
    let ext = ElementaryExtension::new(&config).unwrap();

    let err = ext.initialize().unwrap_err();

    assert!(matches!(err, ExtensionError::ProfileNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!config.profiles_dir.exists());
}

#[test]
fn test_monitor_report_requires_report_file() {
    let h = Harness::new();
    let config = h.config();
    fs::create_dir_all(&config.profiles_dir).unwrap();
    let ext = ElementaryExtension::new(&config).unwrap();

    let err = ext.monitor_report().unwrap_err();

    assert!(matches!(err, ExtensionError::PreconditionFailed { .. }));
    assert!(err.to_string().contains("report.html"));
}

#[test]
fn test_monitor_report_requires_profiles_dir() {
    let h = Harness::new();
    let config = h.config();
    fs::write(&config.file_path, "<html/>").unwrap();
    let ext = ElementaryExtension::new(&config).unwrap();

    let err = ext.monitor_report().unwrap_err();

    assert!(matches!(err, ExtensionError::PreconditionFailed { .. }));
    assert!(err.to_string().contains("profiles directory"));
}

#[cfg(unix)]
#[test]
fn test_monitor_report_invokes_edr() {
    let h = Harness::new();
    let config = ExtensionConfig {
        edr_bin: h.fake_bin("edr", 0),
        ..h.config()
    };
    fs::create_dir_all(&config.profiles_dir).unwrap();
    fs::write(&config.file_path, "<html/>").unwrap();
    let ext = ElementaryExtension::new(&config).unwrap();

    let result = ext.monitor_report().unwrap();

    assert_eq!(result.code, 0);
    assert_eq!(result.stdout.trim(), "edr says hi");
    assert_eq!(
        h.calls(),
        vec![format!(
            "edr monitor report --profiles-dir={} --file-path={}",
            config.profiles_dir.display(),
            config.file_path.display()
        )]
    );
}

#[cfg(unix)]
#[test]
fn test_monitor_send_report_does_not_validate_slack_settings() {
    let h = Harness::new();
    let config = ExtensionConfig {
        edr_bin: h.fake_bin("edr", 0),
        ..h.config()
    };
    let ext = ElementaryExtension::new(&config).unwrap();

    ext.monitor_send_report().unwrap();

    assert_eq!(
        h.calls(),
        vec![format!(
            "edr monitor send-report --profiles-dir={} --slack-token= --slack-channel-name=",
            config.profiles_dir.display()
        )]
    );
}

#[cfg(unix)]
#[test]
fn test_invoke_appends_configured_flags() {
    let h = Harness::new();
    let config = ExtensionConfig {
        edr_bin: h.fake_bin("edr", 0),
        config_dir: Some(PathBuf::from("cfg")),
        monitor: MonitorOptions {
            days_back: Some(3),
            ..MonitorOptions::default()
        },
        ..h.config()
    };
    let ext = ElementaryExtension::new(&config).unwrap();

    ext.invoke(Some("monitor"), &strings(&["--group-by", "table"]))
        .unwrap();

    assert_eq!(
        h.calls(),
        vec!["edr monitor --group-by table --config-dir=cfg --days-back=3".to_string()]
    );
}

#[cfg(unix)]
#[test]
fn test_invoke_propagates_exit_code() {
    let h = Harness::new();
    let config = ExtensionConfig {
        edr_bin: h.fake_bin("edr", 2),
        ..h.config()
    };
    let ext = ElementaryExtension::new(&config).unwrap();

    let err = ext.invoke(Some("monitor"), &[]).unwrap_err();

    match &err {
        ExtensionError::ProcessFailed { code, stdout, .. } => {
            assert_eq!(*code, 2);
            assert_eq!(stdout.trim(), "edr says hi");
        }
        other => panic!("Expected ProcessFailed, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}

#[cfg(unix)]
#[test]
fn test_pass_through_forwards_arguments_unchanged() {
    let h = Harness::new();
    let config = ExtensionConfig {
        edr_bin: h.fake_bin("edr", 0),
        monitor: MonitorOptions {
            env: Some("prod".to_string()),
            ..MonitorOptions::default()
        },
        ..h.config()
    };
    let ext = ElementaryExtension::new(&config).unwrap();

    ext.pass_through(&strings(&["report", "--open-browser=false"]))
        .unwrap();

    assert_eq!(h.calls(), vec!["edr report --open-browser=false".to_string()]);
}

#[cfg(unix)]
#[test]
fn test_pre_invoke_runs_clean_then_deps() {
    let h = Harness::new();
    let config = ExtensionConfig {
        dbt_bin: h.fake_bin("dbt", 0),
        skip_pre_invoke: false,
        ..h.config()
    };
    fs::create_dir_all(&config.project_dir).unwrap();
    let ext = ElementaryExtension::new(&config).unwrap();

    ext.pre_invoke(Some("monitor")).unwrap();

    assert_eq!(h.calls(), strings(&["dbt clean", "dbt deps"]));
}

#[cfg(unix)]
#[test]
fn test_pre_invoke_skipped_for_exempt_commands_and_when_disabled() {
    let h = Harness::new();
    let enabled = ExtensionConfig {
        dbt_bin: h.fake_bin("dbt", 0),
        skip_pre_invoke: false,
        ..h.config()
    };
    let ext = ElementaryExtension::new(&enabled).unwrap();
    ext.pre_invoke(Some("deps")).unwrap();
    ext.pre_invoke(Some("clean")).unwrap();

    let disabled = ExtensionConfig {
        skip_pre_invoke: true,
        ..enabled.clone()
    };
    ElementaryExtension::new(&disabled)
        .unwrap()
        .pre_invoke(Some("monitor"))
        .unwrap();

    assert!(h.calls().is_empty());
}

#[cfg(unix)]
#[test]
fn test_failing_clean_short_circuits_deps() {
    let h = Harness::new();
    let config = ExtensionConfig {
        dbt_bin: h.fake_bin("dbt", 3),
        skip_pre_invoke: false,
        ..h.config()
    };
    fs::create_dir_all(&config.project_dir).unwrap();
    let ext = ElementaryExtension::new(&config).unwrap();

    let err = ext.pre_invoke(None).unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert_eq!(h.calls(), strings(&["dbt clean"]));
}
