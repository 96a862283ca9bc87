use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, error};

use crate::core::command::InvocationCommand;
use crate::core::error::RunnerError;
use crate::core::job::RunResult;

/// Runs the external command for one file and waits for it to finish.
pub trait Invoker {
    fn invoke(&mut self, command: &InvocationCommand, file: &Path)
        -> Result<RunResult, RunnerError>;
}

/// Spawns a real child process and captures its output in full.
#[derive(Debug, Default)]
pub struct ProcessInvoker;

impl Invoker for ProcessInvoker {
    fn invoke(
        &mut self,
        command: &InvocationCommand,
        file: &Path,
    ) -> Result<RunResult, RunnerError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(command.to_args(file))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(program = %command.program, file = %file.display(), "spawning child process");
        let child = cmd.spawn().map_err(|e| {
            error!(err = %e, program = %command.program, "failed to spawn command");
            if e.kind() == std::io::ErrorKind::NotFound {
                RunnerError::BinaryNotFound {
                    program: command.program.clone(),
                }
            } else {
                RunnerError::Spawn {
                    program: command.program.clone(),
                    source: e,
                }
            }
        })?;

        let output = child.wait_with_output().map_err(|e| RunnerError::Spawn {
            program: command.program.clone(),
            source: e,
        })?;

        let result = RunResult::from(output);
        debug!(exit_code = result.exit_code, "command finished");
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> InvocationCommand {
        InvocationCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[test]
    fn captures_both_streams_and_code() {
        let command = sh("echo \"out $0\"; echo err >&2; exit 3");
        let result = ProcessInvoker
            .invoke(&command, Path::new("dir/a.png"))
            .unwrap();

        assert_eq!(result.stdout, "out dir/a.png\n");
        assert_eq!(result.stderr, "err\n");
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn missing_program_is_fatal() {
        let command = InvocationCommand {
            program: "pngsweep-no-such-program".to_string(),
            args: Vec::new(),
        };
        let err = ProcessInvoker
            .invoke(&command, Path::new("a.png"))
            .unwrap_err();
        assert!(matches!(err, RunnerError::BinaryNotFound { .. }));
    }
}
