//! `manifest` and `jar`: packaging the compiled classes.

use anyhow::Result;

use super::{select_runner, TaskContext};
use crate::core::{JarManifest, Task};
use crate::util::fs::ensure_dir;
use crate::util::Status;

/// Write the manifest, choosing the main class from the runnable sources.
pub fn manifest(ctx: &TaskContext<'_>, args: &[String]) -> Result<bool> {
    let project = ctx.project;

    let manifest_dir = project.abs(project.manifest_dir());
    if !ensure_dir(&manifest_dir)? {
        ctx.shell.status(
            Status::Created,
            format!("manifest directory `{}`", project.manifest_dir().display()),
        );
    }

    let runner = select_runner(ctx, args)?;
    let manifest = JarManifest::new(&project.artifact().name, project.qualified_class(&runner));
    manifest.write(&project.abs(&project.manifest_file()))?;

    ctx.shell.status(
        Status::Created,
        format!("manifest `{}`", project.manifest_file().display()),
    );
    Ok(true)
}

/// Package the output directory into `<out>/<package>.jar`.
///
/// A missing manifest is generated first, and classes are compiled first when
/// the output directory did not exist yet.
pub fn jar(ctx: &TaskContext<'_>, args: &[String]) -> Result<bool> {
    let project = ctx.project;

    let manifest_file = project.manifest_file();
    if !project.abs(&manifest_file).exists() {
        ctx.shell
            .verbose(Status::Packaging, "manifest does not exist, creating it");
        ctx.require(Task::Jar, Task::Manifest, args)?;
    }

    if !ensure_dir(&project.abs(project.out_dir()))? {
        ctx.shell
            .verbose(Status::Packaging, "output directory was missing, compiling first");
        ctx.require(Task::Jar, Task::Compile, args)?;
    }

    let cmd = ctx.toolchain.archive_command(
        &project.jar_file(),
        &manifest_file,
        project.out_dir(),
        project.package_root_segment(),
    );
    ctx.exec(Status::Packaging, cmd)
}
