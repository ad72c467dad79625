//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Path the command reads its config from (absent unless written)
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("Failed to write input file");
        path
    }

    /// `fieldcut` isolated from any user config file
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fieldcut").expect("Failed to find fieldcut binary");
        cmd.env("FIELDCUT_CONFIG", self.config_path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
