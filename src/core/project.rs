//! Project discovery.
//!
//! A [`ProjectConfig`] is resolved once at startup from the filesystem: the
//! single package directory under the source prefix gives the package name,
//! which in turn picks the harness jar and tester package by name similarity.
//! Nothing is mutated afterwards.

use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::manifest::MANIFEST_FILE_NAME;
use crate::core::matching::{best_match, NameMatch};
use crate::util::fs::{files_with_extension, list_dir_names};
use crate::util::{Config, Shell, Status};

/// Signature of a Java entry point.
static MAIN_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*public\s+static\s+void\s+main\s*\(\s*String\s*\[\]")
        .expect("main signature pattern is valid")
});

/// Separator between class path entries.
#[cfg(windows)]
pub const CLASSPATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const CLASSPATH_SEPARATOR: &str = ":";

/// Error while resolving the project configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("source directory `{}` does not exist", path.display())]
    SourceDirMissing { path: PathBuf },

    #[error("package directory `{}` does not exist", path.display())]
    PackageDirMissing { path: PathBuf },

    #[error(
        "cannot predict the package name: expected exactly one entry in `{}`, found {}",
        path.display(),
        describe_entries(found)
    )]
    PackageAmbiguous { path: PathBuf, found: Vec<String> },

    #[error("no artifacts found in `{}`", path.display())]
    NoArtifacts { path: PathBuf },

    #[error("no tester packages found in `{}`", path.display())]
    NoHarnessSources { path: PathBuf },

    #[error("no java source files found in `{}`", path.display())]
    NoSources { path: PathBuf },

    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_entries(found: &[String]) -> String {
    if found.is_empty() {
        "none".to_string()
    } else {
        format!("{} ({})", found.len(), found.join(", "))
    }
}

/// Resolved, immutable project configuration.
///
/// Paths other than [`ProjectConfig::root`] and the harness paths are
/// relative to the project root; external tools are run from there.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    root: PathBuf,
    out_dir: PathBuf,
    manifest_dir: PathBuf,
    package_prefix: String,
    package_name: String,
    package_dir: PathBuf,
    artifact: NameMatch,
    harness_package: NameMatch,
    tester_package: String,
    tester_class: String,
    classpath: String,
    sources: Vec<String>,
    runnables: Vec<String>,
}

impl ProjectConfig {
    /// Resolve the project rooted at `root`, reporting each prediction.
    pub fn discover(root: &Path, config: &Config, shell: &Shell) -> Result<Self, ConfigError> {
        let src_dir = config.src_dir();
        if !root.join(&src_dir).exists() {
            return Err(ConfigError::SourceDirMissing {
                path: root.join(&src_dir),
            });
        }

        let package_prefix = config.package_prefix().to_string();
        let prefix_dir = src_dir.join(dotted_to_path(&package_prefix));
        let package_name = single_package(&root.join(&prefix_dir))?;
        shell.status(
            Status::Predicted,
            format!("package name \"{}\"", package_name),
        );
        let package_dir = prefix_dir.join(&package_name);

        // A relative harness root in the config is relative to the project
        let harness_root = root.join(config.harness_root());
        let artifact = match_artifact(&harness_root.join("artifacts"), &package_name)?;
        shell.status(
            Status::Predicted,
            format!(
                "tester jar \"{}.jar\" (ratio {:.3})",
                artifact.name, artifact.ratio
            ),
        );

        let tester_package = config.tester_package().to_string();
        let harness_sources = harness_root
            .join("java")
            .join(dotted_to_path(&tester_package));
        let harness_package = match_harness_package(&harness_sources, &package_name)?;
        tracing::debug!(
            package = %harness_package.name,
            ratio = harness_package.ratio,
            "matched tester package"
        );

        let out_dir = config.out_dir();
        let classpath = build_classpath(&harness_root, &artifact.name, &out_dir);

        let abs_package_dir = root.join(&package_dir);
        let sources =
            files_with_extension(&abs_package_dir, "java").map_err(|source| ConfigError::Io {
                path: abs_package_dir.clone(),
                source,
            })?;
        if sources.is_empty() {
            return Err(ConfigError::NoSources {
                path: abs_package_dir,
            });
        }
        shell.status(Status::Found, format!("java sources {}", quote_list(&sources)));

        let runnables = find_runnables(&abs_package_dir, &sources)?;
        if runnables.is_empty() {
            shell.warn("no runnable java sources found");
        } else {
            shell.status(
                Status::Found,
                format!("runnable sources {}", quote_list(&runnables)),
            );
        }

        Ok(ProjectConfig {
            root: root.to_path_buf(),
            out_dir,
            manifest_dir: config.manifest_dir(),
            package_prefix,
            package_name,
            package_dir,
            artifact,
            harness_package,
            tester_package,
            tester_class: config.tester_class().to_string(),
            classpath,
            sources,
            runnables,
        })
    }

    /// Project root; the working directory of every external tool.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a project-relative path against the root.
    pub fn abs(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Output directory for classes and the packaged jar.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn manifest_dir(&self) -> &Path {
        &self.manifest_dir
    }

    /// Path of the generated manifest file.
    pub fn manifest_file(&self) -> PathBuf {
        self.manifest_dir.join(MANIFEST_FILE_NAME)
    }

    /// Path of the packaged jar, `<out>/<package>.jar`.
    pub fn jar_file(&self) -> PathBuf {
        self.out_dir.join(format!("{}.jar", self.package_name))
    }

    /// Directory the compiler writes this package's classes to.
    pub fn class_dir(&self) -> PathBuf {
        self.out_dir
            .join(dotted_to_path(&self.package_prefix))
            .join(&self.package_name)
    }

    /// First segment of the package prefix, the root of the packaged tree.
    pub fn package_root_segment(&self) -> &str {
        self.package_prefix
            .split('.')
            .next()
            .unwrap_or(&self.package_prefix)
    }

    pub fn package_prefix(&self) -> &str {
        &self.package_prefix
    }

    /// The single discovered package name.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Harness jar matched to the package (name without `.jar`).
    pub fn artifact(&self) -> &NameMatch {
        &self.artifact
    }

    /// Tester package matched to the package.
    pub fn harness_package(&self) -> &NameMatch {
        &self.harness_package
    }

    /// Fully qualified name of the harness tester entry point.
    pub fn tester_main_class(&self) -> String {
        format!(
            "{}.{}.{}",
            self.tester_package, self.harness_package.name, self.tester_class
        )
    }

    /// Fully qualified name of a class in the project package.
    pub fn qualified_class(&self, class: &str) -> String {
        format!("{}.{}.{}", self.package_prefix, self.package_name, class)
    }

    pub fn classpath(&self) -> &str {
        &self.classpath
    }

    /// File names of every `.java` source in the package, sorted.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Project-relative paths of every source.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.sources
            .iter()
            .map(|s| self.package_dir.join(s))
            .collect()
    }

    /// File names of the sources that declare an entry point.
    pub fn runnables(&self) -> &[String] {
        &self.runnables
    }
}

/// `a.b.c` -> `a/b/c`
pub fn dotted_to_path(dotted: &str) -> PathBuf {
    PathBuf::from(dotted.replace('.', &MAIN_SEPARATOR.to_string()))
}

fn list(path: &Path) -> Result<Vec<String>, ConfigError> {
    list_dir_names(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn single_package(prefix_dir: &Path) -> Result<String, ConfigError> {
    let mut entries = list_dir_names(prefix_dir).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::PackageDirMissing {
                path: prefix_dir.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: prefix_dir.to_path_buf(),
                source,
            }
        }
    })?;

    if entries.len() != 1 {
        return Err(ConfigError::PackageAmbiguous {
            path: prefix_dir.to_path_buf(),
            found: entries,
        });
    }
    Ok(entries.remove(0))
}

fn match_artifact(artifacts_dir: &Path, package_name: &str) -> Result<NameMatch, ConfigError> {
    let jars: Vec<String> = list(artifacts_dir)?
        .into_iter()
        .filter_map(|name| name.strip_suffix(".jar").map(str::to_string))
        .collect();

    best_match(&jars, package_name, |s| s.to_lowercase()).ok_or_else(|| {
        ConfigError::NoArtifacts {
            path: artifacts_dir.to_path_buf(),
        }
    })
}

fn match_harness_package(sources_dir: &Path, package_name: &str) -> Result<NameMatch, ConfigError> {
    let packages = list(sources_dir)?;

    best_match(&packages, package_name, str::to_string).ok_or_else(|| {
        ConfigError::NoHarnessSources {
            path: sources_dir.to_path_buf(),
        }
    })
}

fn build_classpath(harness_root: &Path, artifact: &str, out_dir: &Path) -> String {
    let entries = [
        harness_root
            .join("artifacts")
            .join(format!("{}.jar", artifact)),
        harness_root.join("lib").join("*"),
        out_dir.to_path_buf(),
    ];
    entries
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(CLASSPATH_SEPARATOR)
}

fn find_runnables(package_dir: &Path, sources: &[String]) -> Result<Vec<String>, ConfigError> {
    let mut runnables = Vec::new();
    for source in sources {
        let path = package_dir.join(source);
        let text = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Io { path, source })?;
        if MAIN_SIGNATURE.is_match(&text) {
            runnables.push(source.clone());
        }
    }
    Ok(runnables)
}

fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ")
}
