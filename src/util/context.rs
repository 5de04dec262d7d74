//! Global context for jbuild operations.
//!
//! Provides centralized access to the project root and configuration paths.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::util::config::{load_config, Config};

/// File name of the project-local configuration.
pub const PROJECT_CONFIG_FILE: &str = "jbuild.toml";

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("", "", "jbuild"));

/// Global context containing paths and configuration locations.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Project root; every relative path is resolved against it
    cwd: PathBuf,

    /// User configuration directory, if the platform has one
    config_dir: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a context rooted at the current working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a context rooted at a specific directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext {
            cwd,
            config_dir: PROJECT_DIRS
                .as_ref()
                .map(|dirs| dirs.config_dir().to_path_buf()),
        }
    }

    /// Override the user configuration directory.
    pub fn with_config_dir(mut self, config_dir: Option<PathBuf>) -> Self {
        self.config_dir = config_dir;
        self
    }

    /// Get the project root.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the global configuration file path.
    pub fn global_config_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join("config.toml"))
    }

    /// Get the project configuration file path.
    pub fn project_config_path(&self) -> PathBuf {
        self.cwd.join(PROJECT_CONFIG_FILE)
    }

    /// Load the merged global and project configuration.
    pub fn load_config(&self) -> Config {
        let global = self.global_config_path();
        let project = self.project_config_path();
        tracing::debug!(
            global = ?global,
            project = %project.display(),
            "loading configuration"
        );
        load_config(global.as_deref(), &project)
    }
}
