//! Process executors.
//!
//! Tasks hand fully built commands to an [`Executor`]; swapping the executor
//! is how tests observe which tools would have been run.

use anyhow::Result;

use crate::util::process::ProcessBuilder;

/// Runs external commands.
pub trait Executor {
    /// Run `cmd` to completion. Returns `true` iff it exited with status zero.
    ///
    /// Failing to start the process at all is an error.
    fn run(&self, cmd: &ProcessBuilder) -> Result<bool>;
}

/// Executor that runs commands with the parent's stdio attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct InheritExecutor;

impl Executor for InheritExecutor {
    fn run(&self, cmd: &ProcessBuilder) -> Result<bool> {
        let status = cmd.status()?;
        tracing::debug!(
            program = %cmd.get_program().display(),
            code = ?status.code(),
            "process exited"
        );
        Ok(status.success())
    }
}
