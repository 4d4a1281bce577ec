//! System process runner using std::process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use slate_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandStatus, OutputMode},
    },
    error::SlateResult,
};

/// Production command runner backed by `std::process::Command`.
///
/// Invocations block until the subprocess exits. `Suppressed` pipes both
/// output streams away from the terminal (captured stderr is logged at
/// debug level on failure); `Inherited` hands the terminal to the child.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
        output: OutputMode,
    ) -> SlateResult<CommandStatus> {
        debug!(program, ?args, cwd = ?cwd, ?output, "Running command");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let status = match output {
            OutputMode::Suppressed => {
                let out = command
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(|e| spawn_error(program, args, e))?;

                if !out.status.success() {
                    warn!(
                        program,
                        stderr = %String::from_utf8_lossy(&out.stderr).trim_end(),
                        "Command exited non-zero"
                    );
                }
                out.status
            }
            OutputMode::Inherited => command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| spawn_error(program, args, e))?,
        };

        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

fn spawn_error(program: &str, args: &[String], e: std::io::Error) -> slate_core::error::SlateError {
    ApplicationError::CommandSpawnFailed {
        command: format!("{} {}", program, args.join(" ")),
        reason: e.to_string(),
    }
    .into()
}
