//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jbuild::util::shell::ColorChoice;
use jbuild::Task;

/// jbuild - compile, package and run a single-package Java project
#[derive(Parser)]
#[command(name = "jbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Root of the test harness (contains artifacts/, lib/ and java/)
    #[arg(long, global = true, env = "JBUILD_HARNESS", value_name = "DIR")]
    pub harness: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile every source of the package into out/
    Compile(TaskArgs),

    /// Remove out/ and META-INF/
    Clean(TaskArgs),

    /// Generate META-INF/MANIFEST.MF
    Manifest(TaskArgs),

    /// Package out/ into out/<package>.jar
    Jar(TaskArgs),

    /// Run the packaged jar
    RunJar(TaskArgs),

    /// Run the harness tester against the package
    RunClass(TaskArgs),
}

#[derive(Args)]
pub struct TaskArgs {
    /// Extra arguments; the last one may select the entry point by index
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Commands {
    /// The task to run and its extra arguments.
    pub fn into_task(self) -> (Task, Vec<String>) {
        match self {
            Commands::Compile(a) => (Task::Compile, a.args),
            Commands::Clean(a) => (Task::Clean, a.args),
            Commands::Manifest(a) => (Task::Manifest, a.args),
            Commands::Jar(a) => (Task::Jar, a.args),
            Commands::RunJar(a) => (Task::RunJar, a.args),
            Commands::RunClass(a) => (Task::RunClass, a.args),
        }
    }
}
