mod cli;
mod config;
mod core;
mod logging;

use std::io;

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::config::RunnerConfig;
use crate::core::error::RunnerError;
use crate::core::invoker::ProcessInvoker;
use crate::core::BatchOutcome;

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

// A halted batch is reported on stdout and still exits 0.
fn run() -> Result<(), RunnerError> {
    let cli = Cli::parse();
    let config = RunnerConfig::from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match crate::core::run(&config, cli.start_index, &mut ProcessInvoker, &mut out)? {
        BatchOutcome::Completed { processed } => info!(processed, "batch completed"),
        BatchOutcome::Halted {
            index,
            file_name,
            exit_code,
        } => info!(index, file = %file_name, exit_code, "batch halted"),
    }
    Ok(())
}
