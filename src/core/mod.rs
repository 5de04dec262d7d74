//! Core data structures.

pub mod manifest;
pub mod matching;
pub mod project;
pub mod task;

pub use manifest::JarManifest;
pub use matching::{best_match, similarity_ratio, NameMatch};
pub use project::{ConfigError, ProjectConfig};
pub use task::Task;
