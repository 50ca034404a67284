//! Live shell executor using `std::process::Command`.

use std::process::Command;

use crate::error::PortError;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Live shell executor that runs command lines through `<shell> -c`.
pub struct LiveShellExecutor {
    shell: String,
}

impl LiveShellExecutor {
    /// Creates an executor for the given shell program (e.g. `bash`).
    pub fn new(shell: impl Into<String>) -> Self {
        Self { shell: shell.into() }
    }
}

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, PortError> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| format!("failed to start {}: {e}", self.shell))?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
