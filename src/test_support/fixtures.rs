//! On-disk fixtures: a student project next to a test harness.
//!
//! Layout created under a temporary directory:
//!
//! ```text
//! project/src/ru/ifmo/ctddev/kichigin/<package>/*.java
//! harness/artifacts/<artifact>.jar
//! harness/lib/
//! harness/java/info/kgeorgiy/java/advanced/<tester package>/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::project::dotted_to_path;
use crate::util::config::{DEFAULT_PACKAGE_PREFIX, DEFAULT_TESTER_PACKAGE};
use crate::util::Config;

/// A project and harness laid out in a temporary directory.
#[derive(Debug)]
pub struct JavaProjectFixture {
    _tmp: TempDir,
    root: PathBuf,
    harness_root: PathBuf,
}

impl JavaProjectFixture {
    /// Start a fixture whose single package is `package`.
    pub fn new(package: &str) -> JavaProjectFixtureBuilder {
        JavaProjectFixtureBuilder {
            package: package.to_string(),
            sources: None,
            artifacts: None,
            harness_packages: None,
        }
    }

    /// Source of a class with a `main` method in the default prefix.
    pub fn runnable_source(package: &str, class: &str) -> String {
        format!(
            "package {prefix}.{package};\n\
             \n\
             public class {class} {{\n    \
                 public static void main(String[] args) {{\n        \
                     System.out.println(\"{class}\");\n    \
                 }}\n\
             }}\n",
            prefix = DEFAULT_PACKAGE_PREFIX,
        )
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn harness_root(&self) -> &Path {
        &self.harness_root
    }

    /// Default configuration pointed at the fixture harness.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.harness.root = Some(self.harness_root.clone());
        config
    }
}

/// Builder for [`JavaProjectFixture`].
#[derive(Debug)]
pub struct JavaProjectFixtureBuilder {
    package: String,
    sources: Option<Vec<(String, String)>>,
    artifacts: Option<Vec<String>>,
    harness_packages: Option<Vec<String>>,
}

impl JavaProjectFixtureBuilder {
    /// Add a source file to the package. Without any, a runnable `Main.java`
    /// is written.
    pub fn source(mut self, name: &str, contents: impl Into<String>) -> Self {
        self.sources
            .get_or_insert_with(Vec::new)
            .push((name.to_string(), contents.into()));
        self
    }

    /// Create the package directory with no sources in it.
    pub fn no_sources(mut self) -> Self {
        self.sources = Some(Vec::new());
        self
    }

    /// Harness jar names, without `.jar`. Defaults to `<package>-test`.
    pub fn artifacts(mut self, names: &[&str]) -> Self {
        self.artifacts = Some(names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Tester package directories. Defaults to the package name.
    pub fn harness_packages(mut self, names: &[&str]) -> Self {
        self.harness_packages = Some(names.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn build(self) -> JavaProjectFixture {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("project");
        let harness_root = tmp.path().join("harness");

        let package_dir = root
            .join("src")
            .join(dotted_to_path(DEFAULT_PACKAGE_PREFIX))
            .join(&self.package);
        fs::create_dir_all(&package_dir).unwrap();

        let sources = self.sources.unwrap_or_else(|| {
            vec![(
                "Main.java".to_string(),
                JavaProjectFixture::runnable_source(&self.package, "Main"),
            )]
        });
        for (name, contents) in sources {
            fs::write(package_dir.join(name), contents).unwrap();
        }

        let artifacts_dir = harness_root.join("artifacts");
        fs::create_dir_all(&artifacts_dir).unwrap();
        let artifacts = self
            .artifacts
            .unwrap_or_else(|| vec![format!("{}-test", self.package)]);
        for artifact in artifacts {
            fs::write(artifacts_dir.join(format!("{}.jar", artifact)), "").unwrap();
        }
        fs::create_dir_all(harness_root.join("lib")).unwrap();

        let tester_dir = harness_root
            .join("java")
            .join(dotted_to_path(DEFAULT_TESTER_PACKAGE));
        fs::create_dir_all(&tester_dir).unwrap();
        let harness_packages = self
            .harness_packages
            .unwrap_or_else(|| vec![self.package.clone()]);
        for name in harness_packages {
            fs::create_dir_all(tester_dir.join(name)).unwrap();
        }

        JavaProjectFixture {
            _tmp: tmp,
            root,
            harness_root,
        }
    }
}
