//! jbuild CLI - compile, package and run a single-package Java project

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use jbuild::util::Shell;
use jbuild::{GlobalContext, InheritExecutor, JavaToolchain, ProjectConfig, TaskContext};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI; a missing or unknown command only prints the usage line
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            commands::usage::print();
            return Ok(0);
        }
        Err(e) => e.exit(),
    };
    let Some(command) = cli.command else {
        commands::usage::print();
        return Ok(0);
    };

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("jbuild=debug")
    } else {
        EnvFilter::new("jbuild=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color);

    // Paths given on the command line are relative to where jbuild was invoked
    let ctx = GlobalContext::new()?;
    let invoked_from = ctx.cwd().to_path_buf();
    let ctx = match cli.project_dir {
        Some(dir) => GlobalContext::with_cwd(invoked_from.join(dir)),
        None => ctx,
    };

    let mut config = ctx.load_config();
    if let Some(harness) = cli.harness {
        config.harness.root = Some(invoked_from.join(harness));
    }

    let project = ProjectConfig::discover(ctx.cwd(), &config, &shell)?;
    let toolchain = JavaToolchain::detect(&config.toolchain);
    let task_ctx = TaskContext::new(&project, &toolchain, &InheritExecutor, &shell);

    let (task, args) = command.into_task();
    commands::task::execute(&task_ctx, task, &args)
}
