//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated temp directory
//! - Writing snapshot exports and config files into it
//! - Executing CLI commands with the isolated config

use anyhow::{Context, Result};
use assert_cmd::Command;
use drsla_types::{FleetSnapshot, GroupSnapshot};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{fixed_now, fleet};

/// Isolated test environment.
///
/// # Example
/// ```no_run
/// use drsla_testing::{GroupBuilder, TestWorld};
///
/// let world = TestWorld::new().with_groups(vec![GroupBuilder::healthy("erp").build()]);
/// let mut cmd = assert_cmd::Command::new("drsla");
/// world.configure_command(&mut cmd).arg("analyze").arg(world.snapshot_path());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    snapshot_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let snapshot_path = temp_dir.path().join("fleet.json");

        std::fs::write(&config_path, "").expect("Failed to write config");

        Self {
            temp_dir,
            config_path,
            snapshot_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of the fleet export written by [`with_fleet`](Self::with_fleet).
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Write `groups` as a fleet export captured at [`fixed_now`].
    pub fn with_groups(self, groups: Vec<GroupSnapshot>) -> Self {
        self.with_fleet(&fleet(groups))
    }

    pub fn with_fleet(self, fleet: &FleetSnapshot) -> Self {
        self.write_snapshot(fleet)
            .expect("Failed to write fleet snapshot");
        self
    }

    /// Replace the config file contents.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn write_snapshot(&self, fleet: &FleetSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(fleet).context("Failed to serialize fleet")?;
        std::fs::write(&self.snapshot_path, json)
            .with_context(|| format!("Failed to write {}", self.snapshot_path.display()))
    }

    /// Write an arbitrary file under the temp root and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("drsla")`).
    /// Points `--config` at the isolated file and freezes the clock for
    /// `analyze` via `DRSLA_NOW`.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("DRSLA_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.env("DRSLA_NOW", fixed_now().to_rfc3339());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
