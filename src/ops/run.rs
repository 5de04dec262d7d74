//! `run-jar` and `run-class`, plus entry point selection.

use anyhow::Result;

use super::{TaskContext, TaskError};
use crate::core::Task;
use crate::util::fs::files_with_extension;
use crate::util::Status;

/// Pick the entry point class (simple name, no `.java`).
///
/// With several runnable sources the last argument is read as an index into
/// them. Negative indices count from the end. A missing, malformed or
/// out-of-range index selects the first one.
pub fn select_runner(ctx: &TaskContext<'_>, args: &[String]) -> Result<String> {
    let project = ctx.project;
    let runnables = project.runnables();

    if runnables.is_empty() {
        return Err(TaskError::NoRunnableClass {
            package: project.package_name().to_string(),
        }
        .into());
    }

    let mut selected = 0;
    if runnables.len() > 1 {
        selected = args
            .last()
            .and_then(|arg| runner_index(arg, runnables.len()))
            .unwrap_or(0);
        ctx.shell.status(
            Status::Selected,
            format!(
                "runnable \"{}\" ({}), index is taken from the last argument or 0",
                runnables[selected], selected
            ),
        );
    }

    let file = &runnables[selected];
    Ok(file.strip_suffix(".java").unwrap_or(file).to_string())
}

fn runner_index(arg: &str, count: usize) -> Option<usize> {
    let index = arg.parse::<isize>().ok()?;
    let index = if index < 0 {
        count.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    (index < count).then_some(index)
}

/// Run the packaged jar, building it first if it is missing.
pub fn run_jar(ctx: &TaskContext<'_>, args: &[String]) -> Result<bool> {
    let project = ctx.project;

    let jar_file = project.jar_file();
    if !project.abs(&jar_file).exists() {
        ctx.shell
            .verbose(Status::Packaging, "jar file does not exist, creating it");
        ctx.require(Task::RunJar, Task::Jar, args)?;
    }

    let cmd = ctx.toolchain.run_jar_command(&jar_file, project.classpath());
    ctx.exec(Status::Running, cmd)
}

/// Run the harness tester against the selected entry point.
///
/// `args[0]` is the tester mode. When more than two arguments are given the
/// second one is passed on to the tester as well; the last argument is kept
/// for the entry point index.
pub fn run_class(ctx: &TaskContext<'_>, args: &[String]) -> Result<bool> {
    let Some(mode) = args.first() else {
        return Err(TaskError::MissingArgument {
            task: Task::RunClass,
        }
        .into());
    };
    let project = ctx.project;

    let class_dir = project.abs(&project.class_dir());
    let has_classes = class_dir.is_dir() && !files_with_extension(&class_dir, "class")?.is_empty();
    if !has_classes {
        ctx.shell
            .verbose(Status::Compiling, "no class files found, compiling first");
        ctx.require(Task::RunClass, Task::Compile, args)?;
    }

    let runner = project.qualified_class(&select_runner(ctx, args)?);
    let mut tester_args = vec![mode.as_str(), runner.as_str()];
    if args.len() > 2 {
        tester_args.push(args[1].as_str());
    }

    let cmd = ctx.toolchain.run_class_command(
        project.classpath(),
        &project.tester_main_class(),
        tester_args,
    );
    ctx.exec(Status::Running, cmd)
}
