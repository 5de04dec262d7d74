//! High-level operations.
//!
//! One function per task. Every task returns `Ok(true)` when the external
//! tool it finally runs exits successfully and `Ok(false)` when it reports
//! failure. Prerequisites that fail while preparing a later task are errors.

pub mod clean;
pub mod compile;
pub mod package;
pub mod run;

use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::builder::{Executor, JavaToolchain};
use crate::core::{ProjectConfig, Task};
use crate::util::{ProcessBuilder, Shell, Status};

pub use clean::clean;
pub use compile::compile;
pub use package::{jar, manifest};
pub use run::{run_class, run_jar, select_runner};

/// Error raised by a task before or instead of running its tool.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("`{task}` needs at least one more argument")]
    MissingArgument { task: Task },

    #[error("no runnable java source found in package `{package}`")]
    NoRunnableClass { package: String },

    #[error("`{prerequisite}` failed while preparing `{task}`")]
    PrerequisiteFailed { task: Task, prerequisite: Task },

    #[error("cannot remove `{}`: directory does not exist", path.display())]
    CleanMissing { path: PathBuf },
}

/// Everything a task needs: the resolved project, the tools, and where to
/// run and report.
pub struct TaskContext<'a> {
    pub project: &'a ProjectConfig,
    pub toolchain: &'a JavaToolchain,
    pub executor: &'a dyn Executor,
    pub shell: &'a Shell,
}

impl<'a> TaskContext<'a> {
    pub fn new(
        project: &'a ProjectConfig,
        toolchain: &'a JavaToolchain,
        executor: &'a dyn Executor,
        shell: &'a Shell,
    ) -> Self {
        TaskContext {
            project,
            toolchain,
            executor,
            shell,
        }
    }

    /// Echo `cmd` and run it from the project root.
    fn exec(&self, status: Status, cmd: ProcessBuilder) -> Result<bool> {
        let cmd = cmd.cwd(self.project.root());
        self.shell.status(status, cmd.display_command());
        self.executor.run(&cmd)
    }

    /// Run `prerequisite` for `task`; a falsy outcome becomes an error.
    fn require(&self, task: Task, prerequisite: Task, args: &[String]) -> Result<()> {
        if !run_task(self, prerequisite, args)? {
            return Err(TaskError::PrerequisiteFailed { task, prerequisite }.into());
        }
        Ok(())
    }
}

/// Dispatch a task by name.
pub fn run_task(ctx: &TaskContext<'_>, task: Task, args: &[String]) -> Result<bool> {
    tracing::debug!(%task, ?args, "running task");
    match task {
        Task::Compile => compile(ctx, args),
        Task::Clean => clean(ctx, args),
        Task::Manifest => manifest(ctx, args),
        Task::Jar => jar(ctx, args),
        Task::RunJar => run_jar(ctx, args),
        Task::RunClass => run_class(ctx, args),
    }
}
