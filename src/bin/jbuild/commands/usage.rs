//! The one-line usage shown for a missing or unknown command.

use std::path::Path;

use jbuild::Task;

pub fn print() {
    let program = std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "jbuild".to_string());
    println!("Usage: {} {}", program, Task::sorted_names().join(" | "));
}
