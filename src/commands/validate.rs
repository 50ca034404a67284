//! `pdt validate` command: run the automated validation list.

use super::build::run_shell;
use super::load_project;
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::ui;

/// Execute the `validate` command.
///
/// Commands run in declaration order; the first failure stops the run.
///
/// # Errors
///
/// Returns [`PdtError::ShellFailed`] for the first failing command.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig) -> Result<()> {
    let project = load_project(ctx, config)?;
    let commands = project.validation_commands();
    if commands.is_empty() {
        ui::warn(format!(
            "No commands under `## Automated Validation` in {}.",
            config.paths.project_description.display()
        ));
        return Ok(());
    }

    let total = commands.len();
    for (i, command) in commands.into_iter().enumerate() {
        ui::step(format!("[{}/{total}] {command}", i + 1));
        let output = run_shell(ctx, &command)?;
        if !output.success() {
            return Err(PdtError::ShellFailed { command, exit_code: output.exit_code });
        }
    }
    ui::success(format!("All {total} validation command(s) passed."));
    Ok(())
}
