//! `compile`: run `javac` over every source in the package.

use anyhow::Result;

use super::TaskContext;
use crate::util::fs::ensure_dir;
use crate::util::Status;

/// Compile all discovered sources into the output directory.
///
/// Extra arguments are accepted and ignored.
pub fn compile(ctx: &TaskContext<'_>, _args: &[String]) -> Result<bool> {
    let project = ctx.project;

    let out_dir = project.abs(project.out_dir());
    if !ensure_dir(&out_dir)? {
        ctx.shell.status(
            Status::Created,
            format!("output directory `{}`", project.out_dir().display()),
        );
    }

    let cmd = ctx.toolchain.compile_command(
        project.classpath(),
        project.out_dir(),
        &project.source_paths(),
    );
    ctx.exec(Status::Compiling, cmd)
}
