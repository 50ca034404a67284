//! Shell executor port for running project commands.

use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// The output of a shell command execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process (`-1` when killed by a signal).
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Whether the command exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes build, deploy and validation command lines.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the configured shell and returns its output.
    ///
    /// A non-zero exit is reported through [`ShellOutput::exit_code`], not as
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned.
    fn run(&self, command: &str) -> Result<ShellOutput, PortError>;
}
