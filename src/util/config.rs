//! Configuration file support for jbuild.
//!
//! Two configuration file locations are read:
//! - Global: `<config dir>/jbuild/config.toml` - user-wide defaults
//! - Project: `jbuild.toml` in the project root - project-specific overrides
//!
//! Project config takes precedence over global config, and the command line
//! takes precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default location of the locally installed test harness.
pub const DEFAULT_HARNESS_ROOT: &str = "/root/code/java_advanced/java-advanced-2016";

/// Default dotted package prefix of the project sources.
pub const DEFAULT_PACKAGE_PREFIX: &str = "ru.ifmo.ctddev.kichigin";

/// Default dotted package prefix of the harness tester classes.
pub const DEFAULT_TESTER_PACKAGE: &str = "info.kgeorgiy.java.advanced";

/// jbuild configuration.
///
/// Every field is optional so that partial files can be layered with
/// [`Config::merge`]; the accessors fill in the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project layout settings
    pub project: ProjectSettings,

    /// Test harness settings
    pub harness: HarnessSettings,

    /// Java toolchain overrides
    pub toolchain: ToolchainSettings,
}

/// Layout of the project being built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Source root, relative to the project root
    pub src_dir: Option<PathBuf>,

    /// Output directory for classes and the jar
    pub out_dir: Option<PathBuf>,

    /// Directory holding the generated manifest
    pub manifest_dir: Option<PathBuf>,

    /// Dotted package prefix under which the single package directory lives
    pub package_prefix: Option<String>,
}

/// Location and naming of the external test harness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessSettings {
    /// Harness root (contains `artifacts/`, `lib/` and `java/`)
    pub root: Option<PathBuf>,

    /// Dotted package prefix of the tester sources
    pub tester_package: Option<String>,

    /// Simple name of the tester entry point class
    pub tester_class: Option<String>,
}

/// Paths of the Java executables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    pub javac: Option<PathBuf>,
    pub jar: Option<PathBuf>,
    pub java: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist
    /// or can't be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        merge_opt(&mut self.project.src_dir, other.project.src_dir);
        merge_opt(&mut self.project.out_dir, other.project.out_dir);
        merge_opt(&mut self.project.manifest_dir, other.project.manifest_dir);
        merge_opt(&mut self.project.package_prefix, other.project.package_prefix);

        merge_opt(&mut self.harness.root, other.harness.root);
        merge_opt(&mut self.harness.tester_package, other.harness.tester_package);
        merge_opt(&mut self.harness.tester_class, other.harness.tester_class);

        merge_opt(&mut self.toolchain.javac, other.toolchain.javac);
        merge_opt(&mut self.toolchain.jar, other.toolchain.jar);
        merge_opt(&mut self.toolchain.java, other.toolchain.java);
    }

    pub fn src_dir(&self) -> PathBuf {
        self.project
            .src_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("src"))
    }

    pub fn out_dir(&self) -> PathBuf {
        self.project
            .out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("out"))
    }

    pub fn manifest_dir(&self) -> PathBuf {
        self.project
            .manifest_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("META-INF"))
    }

    pub fn package_prefix(&self) -> &str {
        self.project
            .package_prefix
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE_PREFIX)
    }

    pub fn harness_root(&self) -> PathBuf {
        self.harness
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HARNESS_ROOT))
    }

    pub fn tester_package(&self) -> &str {
        self.harness
            .tester_package
            .as_deref()
            .unwrap_or(DEFAULT_TESTER_PACKAGE)
    }

    pub fn tester_class(&self) -> &str {
        self.harness.tester_class.as_deref().unwrap_or("Tester")
    }
}

fn merge_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (jbuild.toml)
/// 2. Global config (<config dir>/jbuild/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}
