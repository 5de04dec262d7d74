//! jbuild - compile, package and run a single-package Java project
//!
//! This crate discovers a student project's layout by inspecting the
//! filesystem, matches it to a locally installed test harness by name, and
//! drives `javac`, `jar` and `java` to build and run it.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for jbuild unit tests.
///
/// Only compiled for tests. Provides a recording executor and on-disk
/// project fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::builder::{Executor, InheritExecutor, JavaToolchain};
pub use crate::core::{ConfigError, JarManifest, ProjectConfig, Task};
pub use crate::ops::{run_task, TaskContext, TaskError};
pub use crate::util::context::GlobalContext;
