//! Test utilities for jbuild unit tests.
//!
//! [`RecordingExecutor`] stands in for the Java tools so tests can assert on
//! the exact commands a task would run, and [`TaskHarness`] wires a
//! discovered fixture project to it.

pub mod fixtures;

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;

use crate::builder::{Executor, JavaToolchain};
use crate::core::{ProjectConfig, Task};
use crate::ops::{run_task, TaskContext};
use crate::util::{ProcessBuilder, Shell};

pub use fixtures::*;

/// A command seen by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Program as given to the process builder.
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Executor that records commands instead of running them.
///
/// Every command succeeds unless its program was registered with
/// [`RecordingExecutor::failing`].
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<RecordedCall>>,
    failing: Vec<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        RecordingExecutor::default()
    }

    /// Make every invocation of `program` report a non-zero exit.
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Programs of the recorded calls, in order.
    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }
}

impl Executor for RecordingExecutor {
    fn run(&self, cmd: &ProcessBuilder) -> Result<bool> {
        let program = cmd.get_program().display().to_string();
        let succeeded = !self.failing.contains(&program);

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                program,
                args: cmd.get_args().to_vec(),
                cwd: cmd.get_cwd().map(|p| p.to_path_buf()),
            });
        }

        Ok(succeeded)
    }
}

/// A discovered fixture project with a recording executor and the default
/// (bare name) toolchain.
pub struct TaskHarness {
    pub project: ProjectConfig,
    pub toolchain: JavaToolchain,
    pub executor: RecordingExecutor,
    pub shell: Shell,
}

impl TaskHarness {
    /// Discover `fixture`; panics if discovery fails.
    pub fn new(fixture: &JavaProjectFixture, executor: RecordingExecutor) -> Self {
        let shell = Shell::quiet();
        let project = ProjectConfig::discover(fixture.root(), &fixture.config(), &shell)
            .unwrap_or_else(|e| panic!("fixture discovery failed: {}", e));

        TaskHarness {
            project,
            toolchain: JavaToolchain::default(),
            executor,
            shell,
        }
    }

    pub fn context(&self) -> TaskContext<'_> {
        TaskContext::new(&self.project, &self.toolchain, &self.executor, &self.shell)
    }

    pub fn run(&self, task: Task, args: &[String]) -> Result<bool> {
        run_task(&self.context(), task, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_executor() {
        let exec = RecordingExecutor::new().failing("jar");

        assert!(exec
            .run(&ProcessBuilder::new("javac").arg("A.java").cwd("/p"))
            .unwrap());
        assert!(!exec.run(&ProcessBuilder::new("jar")).unwrap());

        let calls = exec.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].args, vec!["A.java"]);
        assert_eq!(calls[0].cwd, Some(PathBuf::from("/p")));
        assert_eq!(exec.programs(), vec!["javac", "jar"]);
    }
}
