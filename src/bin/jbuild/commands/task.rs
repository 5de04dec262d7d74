//! `jbuild <task>`: run one task and turn its outcome into an exit code.

use std::time::Instant;

use anyhow::Result;

use jbuild::util::Status;
use jbuild::{run_task, Task, TaskContext};

/// Exit code when the external tool behind a task reports failure.
const TOOL_FAILED: i32 = 1;

pub fn execute(ctx: &TaskContext<'_>, task: Task, args: &[String]) -> Result<i32> {
    let start = Instant::now();

    if run_task(ctx, task, args)? {
        ctx.shell.status(
            Status::Finished,
            format!("`{}` in {:.2}s", task, start.elapsed().as_secs_f64()),
        );
        Ok(0)
    } else {
        ctx.shell.status(
            Status::Failed,
            format!("`{}`: external tool exited with an error", task),
        );
        Ok(TOOL_FAILED)
    }
}
