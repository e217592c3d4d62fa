//! Shared fixture for the CLI integration tests.
//!
//! Every command runs against a config path inside a fresh temp dir, so the
//! user's real settings never leak into a test.
#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestShop {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

impl TestShop {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("taller").join("config.toml");

        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn write_config(&self, content: &str) {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// `taller --config <tmp>/taller/config.toml`
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("taller");
        cmd.env_remove("RUST_LOG")
            .env_remove("TALLER_CONFIG")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(["--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run taller");
        assert!(
            output.status.success(),
            "taller {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
