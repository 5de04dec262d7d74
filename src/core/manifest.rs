//! The jar manifest (`META-INF/MANIFEST.MF`).

use std::fmt;
use std::path::Path;

use anyhow::Result;

use crate::util::fs::write_string;

/// File name of the manifest inside the manifest directory.
pub const MANIFEST_FILE_NAME: &str = "MANIFEST.MF";

/// Contents of a generated jar manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarManifest {
    /// Jar put on the class path next to the packaged jar
    pub class_path: String,

    /// Fully qualified entry point
    pub main_class: String,
}

impl JarManifest {
    /// Manifest for a jar that runs `main_class` next to `<artifact>.jar`.
    pub fn new(artifact: &str, main_class: impl Into<String>) -> Self {
        JarManifest {
            class_path: format!("{}.jar", artifact),
            main_class: main_class.into(),
        }
    }

    /// Write the manifest to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        write_string(path, &self.to_string())
    }
}

impl fmt::Display for JarManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Manifest-Version: 1.0")?;
        writeln!(f, "Class-Path: {}", self.class_path)?;
        writeln!(f, "Main-Class: {}", self.main_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_format() {
        let manifest = JarManifest::new("WalkTest", "ru.ifmo.ctddev.kichigin.walk.RecursiveWalk");
        assert_eq!(
            manifest.to_string(),
            "Manifest-Version: 1.0\n\
             Class-Path: WalkTest.jar\n\
             Main-Class: ru.ifmo.ctddev.kichigin.walk.RecursiveWalk\n"
        );
    }

    #[test]
    fn test_manifest_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("META-INF").join(MANIFEST_FILE_NAME);

        JarManifest::new("a", "p.q.Main").write(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Manifest-Version: 1.0\n"));
        assert!(written.ends_with("Main-Class: p.q.Main\n"));
    }
}
