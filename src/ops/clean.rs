//! `clean`: remove the output and manifest directories.

use std::io;

use anyhow::{Context, Result};

use super::{TaskContext, TaskError};
use crate::util::fs::remove_dir_all;
use crate::util::Status;

/// Remove the output directory, then the manifest directory.
///
/// Both must exist; a missing one is an error and stops the clean.
pub fn clean(ctx: &TaskContext<'_>, _args: &[String]) -> Result<bool> {
    let project = ctx.project;

    for dir in [project.out_dir(), project.manifest_dir()] {
        let path = project.abs(dir);
        match remove_dir_all(&path) {
            Ok(()) => ctx
                .shell
                .status(Status::Removed, format!("`{}`", dir.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(TaskError::CleanMissing { path }.into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to remove {}", path.display()));
            }
        }
    }

    Ok(true)
}
