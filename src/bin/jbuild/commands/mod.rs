//! Command implementations

pub mod task;
pub mod usage;
