//! Common test utilities for elementary-ext integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Every setting the binaries read, cleared so the host environment can't leak in.
const SETTINGS: &[&str] = &[
    "ELEMENTARY_EXT_BIN",
    "ELEMENTARY_EXT_DBT_BIN",
    "ELEMENTARY_PROJECT_DIR",
    "ELEMENTARY_PROFILES_DIR",
    "ELEMENTARY_CONFIG_DIR",
    "ELEMENTARY_EXT_TYPE",
    "DBT_EXT_TYPE",
    "ELEMENTARY_FILE_PATH",
    "ELEMENTARY_SLACK_CHANNEL_NAME",
    "ELEMENTARY_SLACK_CHANNEL_TOKEN",
    "ELEMENTARY_EXT_SKIP_PRE_INVOKE",
    "ELEMENTARY_EXT_BUNDLE_DIR",
    "ELEMENTARY_DAYS_BACK",
    "ELEMENTARY_TIMEZONE",
    "ELEMENTARY_DBT_QUOTING",
    "ELEMENTARY_DISABLE_SAMPLES",
    "ELEMENTARY_ENV",
    "ELEMENTARY_FULL_REFRESH_DBT_PACKAGE",
    "ELEMENTARY_EXT_LOG_LEVEL",
    "ELEMENTARY_EXT_LOG_FORMAT",
];

/// A scratch project directory for integration tests
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    #[allow(dead_code)]
    fn calls_log(&self) -> PathBuf {
        self.path.join("calls.log")
    }

    /// Install a fake binary that records `<name> <args>` and exits with `code`.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn fake_bin(&self, name: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.path.join("bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        let path = bin_dir.join(name);
        let script = format!(
            "#!/bin/sh\n\
             echo \"{name} $*\" >> \"{log}\"\n\
             echo \"{name} stdout line\"\n\
             echo \"{name} stderr line\" >&2\n\
             exit {code}\n",
            log = self.calls_log().display()
        );
        std::fs::write(&path, script).expect("Failed to write fake binary");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake binary executable");
        path
    }

    /// Lines recorded by fake binaries, in call order
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.calls_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// `bin` run inside the workspace with a clean configuration.
    ///
    /// The pre-invoke hook is disabled and logs are JSON so tests can match fields.
    pub fn cmd(&self, bin: &str) -> Command {
        let mut cmd = bin_cmd(bin);
        cmd.current_dir(&self.path);
        for key in SETTINGS {
            cmd.env_remove(key);
        }
        cmd.env("ELEMENTARY_EXT_SKIP_PRE_INVOKE", "true");
        cmd.env("ELEMENTARY_EXT_LOG_FORMAT", "json");
        cmd
    }

    /// `elementary_extension` with `edr` pointed at `edr`.
    #[allow(dead_code)]
    pub fn extension_cmd(&self, edr: &Path) -> Command {
        let mut cmd = self.cmd("elementary_extension");
        cmd.env("ELEMENTARY_EXT_BIN", edr);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn bin_cmd(bin: &str) -> Command {
    Command::cargo_bin(bin).expect("binary should be built for integration tests")
}

/// Path of a built binary, for tests that need a plain `std::process::Command`
#[allow(deprecated, dead_code)]
pub fn bin_path(bin: &str) -> PathBuf {
    assert_cmd::cargo::cargo_bin(bin)
}
