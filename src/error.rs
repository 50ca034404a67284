//! Error taxonomy shared by every `pdt` command.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error type returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PdtError>;

/// All failures surfaced by the workflow core and its commands.
#[derive(Debug, Error)]
pub enum PdtError {
    /// A named command is missing from the `## Commands` section (or the section is absent).
    #[error("command '{name}' not found in {}", path.display())]
    CommandNotFound {
        /// The requested command name.
        name: String,
        /// Document that was searched.
        path: PathBuf,
    },

    /// The work root contains no task directory.
    #[error("no active task found in {}", work_dir.display())]
    NoActiveTask {
        /// The work root that was inspected.
        work_dir: PathBuf,
    },

    /// The work root contains more than one task directory.
    #[error(
        "multiple active tasks found in {} ({}), please specify which one to use",
        work_dir.display(),
        candidates.join(", ")
    )]
    AmbiguousTask {
        /// The work root that was inspected.
        work_dir: PathBuf,
        /// Names of every task directory found.
        candidates: Vec<String>,
    },

    /// A new task was requested while another one is still in progress.
    #[error("task {} is still active; commit it before starting another", path.display())]
    TaskAlreadyActive {
        /// The task directory that is currently active.
        path: PathBuf,
    },

    /// Direct filesystem failure.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted.
        context: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a port implementation.
    #[error("{context}: {source}")]
    Port {
        /// What was being attempted.
        context: String,
        /// Underlying error.
        #[source]
        source: PortError,
    },

    /// The AI agent process failed or produced unusable output.
    #[error("agent error: {0}")]
    Agent(String),

    /// A project command exited unsuccessfully.
    #[error("command `{command}` exited with status {exit_code}")]
    ShellFailed {
        /// The shell command line.
        command: String,
        /// Process exit code.
        exit_code: i32,
    },

    /// The agent response did not contain a JSON object.
    #[error("no valid JSON object found in the agent response")]
    MissingJson,

    /// A JSON payload could not be decoded.
    #[error("{context}: {source}")]
    Json {
        /// What was being decoded.
        context: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file is malformed.
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Command-line usage error.
    #[error("{0}")]
    Usage(String),
}

impl PdtError {
    /// Wraps a port failure with a description of the attempted operation.
    pub fn port(context: impl Into<String>, source: PortError) -> Self {
        Self::Port { context: context.into(), source }
    }

    /// Wraps an I/O failure with a description of the attempted operation.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }
}
