//! Core library entry for the `pdt` CLI.
//!
//! `pdt` orchestrates an external AI agent around a docs-based workflow: a
//! backlog in `docs/todo.md`, one active task under `docs/todos/work/`, and a
//! project description declaring build, deploy and validation commands.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod ports;
pub mod prompt;
pub mod response;
pub mod ui;
pub mod workspace;

use clap::Parser;

pub use error::{PdtError, Result};

/// Run the CLI with the provided arguments.
///
/// Help and version requests print and return `Ok`.
///
/// # Errors
///
/// Returns [`PdtError::Usage`] when argument parsing fails, or the command's
/// own error.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => {
            let rendered = err.render().to_string();
            let message = rendered.trim_start_matches("error: ").trim_end();
            return Err(PdtError::Usage(message.to_string()));
        }
    };
    commands::dispatch(&cli.command)
}
