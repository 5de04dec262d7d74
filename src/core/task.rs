//! The fixed table of tasks.

use std::fmt;
use std::str::FromStr;

/// A named task the runner can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Compile,
    Clean,
    Manifest,
    Jar,
    RunJar,
    RunClass,
}

impl Task {
    /// Every task, in declaration order.
    pub const ALL: [Task; 6] = [
        Task::Compile,
        Task::Clean,
        Task::Manifest,
        Task::Jar,
        Task::RunJar,
        Task::RunClass,
    ];

    /// The command-line name of the task.
    pub fn name(&self) -> &'static str {
        match self {
            Task::Compile => "compile",
            Task::Clean => "clean",
            Task::Manifest => "manifest",
            Task::Jar => "jar",
            Task::RunJar => "run-jar",
            Task::RunClass => "run-class",
        }
    }

    /// Task names sorted lexically, as shown in the usage line.
    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<_> = Task::ALL.iter().map(Task::name).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .iter()
            .copied()
            .find(|task| task.name() == s)
            .ok_or_else(|| format!("unknown task `{}`", s))
    }
}
