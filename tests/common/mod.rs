//! Common test utilities for the `inventaires` CLI tests.
//!
//! - `TestEnv`: isolated working, home and data directories
//! - Helpers to run the binary and read what it wrote

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json {l}: {e}")))
            .collect()
    }

    pub fn event(&self, kind: &str) -> serde_json::Value {
        self.events()
            .into_iter()
            .find(|e| e["event"] == kind)
            .unwrap_or_else(|| panic!("no {kind} event in:\n{}", self.stdout))
    }
}

/// Working directory, fake home and data directory, all temporary
pub struct TestEnv {
    pub root: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir().join("inventaires.json")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_snapshot(&self, content: &str) {
        fs::create_dir_all(self.data_dir()).unwrap();
        fs::write(self.snapshot_path(), content).unwrap();
    }

    pub fn read_snapshot(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.snapshot_path()).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.path("inventaires.toml"), content).unwrap();
    }

    /// Run with `--data-dir` pointing into the test root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let data_dir = self.data_dir();
        let mut cmd = self.command(self.root.path());
        cmd.arg("--data-dir").arg(&data_dir).args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().unwrap())
    }

    /// Run without `--data-dir`, so the environment and config decide
    pub fn run_bare(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.root.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().unwrap())
    }

    fn command(&self, cwd: &Path) -> Command {
        let home = self.home.path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_inventaires"));
        cmd.current_dir(cwd)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("XDG_DATA_HOME", home.join(".local/share"))
            .env("NO_COLOR", "1")
            .env_remove("INVENTAIRES_DATA_DIR")
            .env_remove("INVENTAIRES_STORAGE_KEY")
            .env_remove("INVENTAIRES_LANG")
            .env_remove("INVENTAIRES_LOW_STOCK")
            .env_remove("INVENTAIRES_LOG");
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
