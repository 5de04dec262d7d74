//! Java toolchain.
//!
//! Knows where `javac`, `jar` and `java` live and how to shape each
//! invocation. Nothing here runs a process; see [`crate::builder::executor`].

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

use crate::util::config::ToolchainSettings;
use crate::util::process::{find_executable, ProcessBuilder};

/// Paths of the three Java tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaToolchain {
    javac: PathBuf,
    jar: PathBuf,
    java: PathBuf,
}

impl JavaToolchain {
    /// Create a toolchain from explicit paths.
    pub fn new(javac: impl Into<PathBuf>, jar: impl Into<PathBuf>, java: impl Into<PathBuf>) -> Self {
        JavaToolchain {
            javac: javac.into(),
            jar: jar.into(),
            java: java.into(),
        }
    }

    /// Resolve the toolchain.
    ///
    /// Each tool is taken from the config override, then `$JAVA_HOME/bin`,
    /// then `PATH`, falling back to the bare name.
    pub fn detect(settings: &ToolchainSettings) -> Self {
        let java_home = std::env::var_os("JAVA_HOME").map(PathBuf::from);
        let resolve = |configured: &Option<PathBuf>, name: &str| {
            resolve_tool(configured.as_deref(), java_home.as_deref(), name)
        };

        let toolchain = JavaToolchain {
            javac: resolve(&settings.javac, "javac"),
            jar: resolve(&settings.jar, "jar"),
            java: resolve(&settings.java, "java"),
        };
        tracing::debug!(?toolchain, "resolved java toolchain");
        toolchain
    }

    /// `javac -cp <classpath> -d <out> <sources...>`
    pub fn compile_command(
        &self,
        classpath: &str,
        out_dir: &Path,
        sources: &[PathBuf],
    ) -> ProcessBuilder {
        ProcessBuilder::new(&self.javac)
            .args(["-cp", classpath])
            .arg("-d")
            .arg(out_dir)
            .args(sources)
    }

    /// `jar -cvfm <jar> <manifest> -C <dir> <entry>`
    pub fn archive_command(
        &self,
        jar_file: &Path,
        manifest: &Path,
        dir: &Path,
        entry: &str,
    ) -> ProcessBuilder {
        ProcessBuilder::new(&self.jar)
            .arg("-cvfm")
            .arg(jar_file)
            .arg(manifest)
            .arg("-C")
            .arg(dir)
            .arg(entry)
    }

    /// `java -jar <jar> -cp <classpath>`
    ///
    /// The class path comes after the jar, so the JVM hands it to the
    /// program as arguments; the manifest's `Class-Path` is what the JVM uses.
    pub fn run_jar_command(&self, jar_file: &Path, classpath: &str) -> ProcessBuilder {
        ProcessBuilder::new(&self.java)
            .arg("-jar")
            .arg(jar_file)
            .args(["-cp", classpath])
    }

    /// `java -cp <classpath> <main class> <args...>`
    pub fn run_class_command<I, S>(&self, classpath: &str, main_class: &str, args: I) -> ProcessBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        ProcessBuilder::new(&self.java)
            .args(["-cp", classpath])
            .arg(main_class)
            .args(args)
    }
}

impl Default for JavaToolchain {
    fn default() -> Self {
        JavaToolchain::new("javac", "jar", "java")
    }
}

fn resolve_tool(configured: Option<&Path>, java_home: Option<&Path>, name: &str) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }

    if let Some(home) = java_home {
        let candidate = home.join("bin").join(format!("{}{}", name, EXE_SUFFIX));
        if candidate.is_file() {
            return candidate;
        }
    }

    find_executable(name).unwrap_or_else(|| PathBuf::from(name))
}
