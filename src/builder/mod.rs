//! Command construction and execution for the Java tools.

pub mod executor;
pub mod toolchain;

pub use executor::{Executor, InheritExecutor};
pub use toolchain::JavaToolchain;
