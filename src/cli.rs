use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "pngsweep",
    version,
    about = "Run a decoder over every image in a directory, stopping at the first failure"
)]
pub struct Cli {
    /// Zero-based index into the sorted file list to start from
    #[arg(value_name = "START_INDEX", default_value_t = 0)]
    pub start_index: usize,
}
