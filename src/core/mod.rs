use std::io::Write;

use tracing::{debug, info, warn};

pub mod batch;
pub mod command;
pub mod error;
pub mod invoker;
pub mod job;

use crate::config::RunnerConfig;
use batch::collect_batch;
use error::RunnerError;
use invoker::Invoker;

/// How a batch ended. A halted batch is still a successful run of the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Completed {
        processed: usize,
    },
    Halted {
        index: usize,
        file_name: String,
        exit_code: i32,
    },
}

/// Runs the configured command once per matching file, starting at
/// `start_index`, and stops at the first non-zero exit code.
///
/// The report goes to `out`. On a halt, "Last index processed" is the index of
/// the failing file, so resuming from it retries that file.
pub fn run<I, W>(
    config: &RunnerConfig,
    start_index: usize,
    invoker: &mut I,
    out: &mut W,
) -> Result<BatchOutcome, RunnerError>
where
    I: Invoker + ?Sized,
    W: Write + ?Sized,
{
    let entries = collect_batch(&config.directory, &config.suffix)?;
    info!(
        directory = %config.directory.display(),
        files = entries.len(),
        start_index,
        "starting batch"
    );

    let mut processed = 0;
    for (index, entry) in entries.iter().enumerate().skip(start_index) {
        writeln!(out, "Processing file {index}: {}", entry.path.display())?;
        out.flush()?;

        let result = invoker.invoke(&config.command, &entry.path)?;
        writeln!(out, "{}", result.stdout)?;

        if !result.success() {
            warn!(index, file = %entry.name, exit_code = result.exit_code, "halting batch");
            writeln!(
                out,
                "Error: Process failed for {} (index {index}) with exit code {}",
                entry.name, result.exit_code
            )?;
            writeln!(out, "{}", result.stderr)?;
            writeln!(out, "Last index processed: {index}")?;
            out.flush()?;
            return Ok(BatchOutcome::Halted {
                index,
                file_name: entry.name.clone(),
                exit_code: result.exit_code,
            });
        }

        debug!(index, file = %entry.name, "file processed");
        processed += 1;
    }

    writeln!(out, "All files processed successfully.")?;
    out.flush()?;
    Ok(BatchOutcome::Completed { processed })
}
