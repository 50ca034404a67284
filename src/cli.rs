//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `pdt`.
#[derive(Debug, Parser)]
#[command(
    name = "pdt",
    version,
    about = "Drive an AI agent through spec, code, test, doc and commit workflows"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prepare the workspace and start a task from the backlog.
    Todo,
    /// Turn a high-level goal into a technical specification.
    Spec {
        /// The goal; asked for interactively when omitted.
        goal: Vec<String>,
    },
    /// Have the agent implement a specification.
    Code {
        /// Spec file (defaults to `.pdt/specs/spec.md`).
        spec: Option<PathBuf>,
        /// List the spec's file operations without calling the agent.
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate tests for a specification.
    Test {
        /// Spec file.
        spec: PathBuf,
    },
    /// Update internal documentation for an implemented feature.
    Doc {
        /// Spec file.
        spec: PathBuf,
        /// Files implementing the feature.
        code: Vec<PathBuf>,
    },
    /// Generate external-facing content (blog, tweet, landing-page-copy, ...).
    Write {
        /// Kind of content.
        #[arg(value_name = "TYPE")]
        kind: String,
        /// What the content is about.
        topic: String,
    },
    /// Refine the active task into a technical plan.
    Refine,
    /// Generate code for the active task.
    Implement,
    /// Run the project's build command.
    Build,
    /// Run the project's deploy command.
    Deploy,
    /// Run the project's automated validation commands.
    Validate,
    /// Commit the work and archive the active task.
    Commit {
        /// Commit without asking for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}
