//! Runner configuration.
//!
//! The CLI only takes a start index, so the directory, suffix and command
//! template are fixed defaults that can be overridden from the environment:
//!
//! - `PNGSWEEP_DIR` (default `PngSuite`)
//! - `PNGSWEEP_SUFFIX` (default `.png`)
//! - `PNGSWEEP_COMMAND` (default `cargo run --`), split with shell quoting rules

use std::path::PathBuf;

use crate::core::command::InvocationCommand;
use crate::core::error::RunnerError;

pub const DEFAULT_DIRECTORY: &str = "PngSuite";
pub const DEFAULT_SUFFIX: &str = ".png";

pub const ENV_DIRECTORY: &str = "PNGSWEEP_DIR";
pub const ENV_SUFFIX: &str = "PNGSWEEP_SUFFIX";
pub const ENV_COMMAND: &str = "PNGSWEEP_COMMAND";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub directory: PathBuf,
    pub suffix: String,
    pub command: InvocationCommand,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            suffix: DEFAULT_SUFFIX.to_string(),
            command: InvocationCommand::default(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, RunnerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RunnerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DIRECTORY) {
            config.directory = PathBuf::from(dir);
        }

        if let Some(suffix) = lookup(ENV_SUFFIX) {
            config.suffix = suffix;
        }

        if let Some(line) = lookup(ENV_COMMAND) {
            config.command = parse_command(&line)?;
        }

        Ok(config)
    }
}

fn parse_command(line: &str) -> Result<InvocationCommand, RunnerError> {
    let tokens = shell_words::split(line).map_err(|err| RunnerError::Config {
        message: format!("{ENV_COMMAND}: {err}"),
    })?;

    InvocationCommand::from_argv(&tokens).ok_or_else(|| RunnerError::Config {
        message: format!("{ENV_COMMAND} is empty"),
    })
}
