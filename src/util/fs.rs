//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Ensure a directory exists, creating it if necessary.
///
/// Returns `true` if the directory was already present.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(true);
    }
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))?;
    Ok(false)
}

/// Remove a directory and all its contents.
///
/// Unlike a plain "if exists" cleanup this surfaces `NotFound` to the caller.
pub fn remove_dir_all(path: &Path) -> io::Result<()> {
    fs::remove_dir_all(path)
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// List the entry names of a directory, sorted lexically.
pub fn list_dir_names(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Find files matching glob patterns relative to a base directory.
pub fn glob_files(base: &Path, patterns: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for pattern in patterns {
        // Glob metacharacters in the base path itself must not be interpreted
        let escaped_base = glob::Pattern::escape(&base.to_string_lossy());
        let full_pattern = Path::new(&escaped_base).join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        let entries = glob(&pattern_str).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid glob pattern `{}`: {}", pattern, e),
            )
        })?;
        for entry in entries {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        results.push(path);
                    }
                }
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                }
            }
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

/// File names (without directory) of the files in `dir` with the given
/// extension, sorted.
pub fn files_with_extension(dir: &Path, extension: &str) -> io::Result<Vec<String>> {
    let files = glob_files(dir, &[format!("*.{}", extension)])?;
    Ok(files
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_reports_presence() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");

        assert!(!ensure_dir(&out).unwrap());
        assert!(out.is_dir());
        assert!(ensure_dir(&out).unwrap());
    }

    #[test]
    fn test_remove_dir_all_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = remove_dir_all(&tmp.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_list_dir_names_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("walk")).unwrap();
        fs::write(tmp.path().join("arrayset"), "").unwrap();
        fs::create_dir(tmp.path().join("crawler")).unwrap();

        let names = list_dir_names(tmp.path()).unwrap();
        assert_eq!(names, vec!["arrayset", "crawler", "walk"]);
    }

    #[test]
    fn test_files_with_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Walk.java"), "class Walk {}").unwrap();
        fs::write(tmp.path().join("RecursiveWalk.java"), "class RecursiveWalk {}").unwrap();
        fs::write(tmp.path().join("notes.txt"), "notes").unwrap();
        fs::create_dir(tmp.path().join("Nested.java")).unwrap();

        let files = files_with_extension(tmp.path(), "java").unwrap();
        assert_eq!(files, vec!["RecursiveWalk.java", "Walk.java"]);
    }

    #[test]
    fn test_glob_files_invalid_pattern_is_io_error() {
        let tmp = TempDir::new().unwrap();

        let err = glob_files(tmp.path(), &["[".to_string()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_write_string_creates_parent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("META-INF").join("MANIFEST.MF");

        write_string(&path, "Manifest-Version: 1.0\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Manifest-Version: 1.0\n");
    }
}
