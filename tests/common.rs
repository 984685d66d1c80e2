#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment: a temporary HOME holding the config dir and the log.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.path("work_log.json")
    }

    pub fn config_dir(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.dir.path().join("worklog")
        } else {
            self.dir.path().join(".worklog")
        }
    }

    /// The binary, pointed at this sandbox's HOME only.
    pub fn wl_home(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("worklog");
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("WORKLOG_LOG");
        cmd
    }

    /// The binary, pointed at this sandbox's HOME and work log.
    pub fn wl(&self) -> Command {
        let mut cmd = self.wl_home();
        cmd.arg("--log").arg(self.log_path());
        cmd
    }

    /// The binary with a fixed clock.
    pub fn wl_at(&self, now: &str) -> Command {
        let mut cmd = self.wl();
        cmd.args(["--now", now]);
        cmd
    }

    pub fn write_log(&self, json: &str) {
        fs::write(self.log_path(), json).expect("write log");
    }

    pub fn read_log(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.log_path()).expect("read log");
        serde_json::from_str(&raw).expect("log is valid json")
    }

    pub fn read_log_raw(&self) -> String {
        fs::read_to_string(self.log_path()).expect("read log")
    }
}

/// One full 8-hour day on Monday 2024-01-01 (ISO week 1).
pub const ONE_DAY_LOG: &str =
    r#"{"2024-01-01": [{"start": "09:00:00 AM", "end": "05:00:00 PM"}]}"#;
