//! Status lines printed for the user.
//!
//! Diagnostics go through `tracing`; these are the messages a user reads while
//! a command runs.

use std::fmt::Display;

use colored::Colorize;

/// Announces a step that is about to run.
pub fn step(message: impl Display) {
    println!("{} {message}", "→".cyan());
}

/// Reports a finished step.
pub fn success(message: impl Display) {
    println!("{} {message}", "✓".green());
}

/// Reports something skipped or worth a second look.
pub fn warn(message: impl Display) {
    eprintln!("{} {message}", "Warning:".yellow().bold());
}

/// Reports a fatal error.
pub fn error(message: impl Display) {
    eprintln!("{} {message}", "Error:".red().bold());
}

/// Prints a block of text, such as a diff or agent output, under a heading.
pub fn section(title: &str, body: &str) {
    println!("{}", title.cyan().bold());
    println!("{}", body.trim_end());
}
