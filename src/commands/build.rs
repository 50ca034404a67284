//! `pdt build` and `pdt deploy`: run a named project command.

use tracing::info;

use super::load_project;
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::ports::ShellOutput;
use crate::ui;

/// Looks up `name` under `## Commands` and runs it through the shell.
///
/// # Errors
///
/// Returns [`PdtError::CommandNotFound`] when the command is not declared and
/// [`PdtError::ShellFailed`] when it exits unsuccessfully.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig, name: &str) -> Result<()> {
    let project = load_project(ctx, config)?;
    let command = project.command(name)?;

    ui::step(format!("Running {name} command: {command}"));
    let output = run_shell(ctx, &command)?;
    if !output.success() {
        return Err(PdtError::ShellFailed { command, exit_code: output.exit_code });
    }
    ui::success(format!("{name} completed successfully."));
    Ok(())
}

/// Runs `command`, echoing its captured output.
pub(crate) fn run_shell(ctx: &ServiceContext, command: &str) -> Result<ShellOutput> {
    let output = ctx
        .shell
        .run(command)
        .map_err(|e| PdtError::port(format!("error running `{command}`"), e))?;
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);
    info!(command, exit_code = output.exit_code, "shell command finished");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{replay, shell_exits, Scratch};

    const PROJECT: &str = "# P\n\n## Commands\n- build: `make`\n- deploy: `./deploy.sh`\n";

    #[test]
    fn runs_declared_command() {
        let scratch = Scratch::new("pdt_cmd_build_ok");
        scratch.write("docs/project-description.md", PROJECT);
        let ctx = replay(vec![shell_exits(0, "built\n")]);

        run(&ctx, &scratch.config, "build").unwrap();
    }

    #[test]
    fn failing_command_reports_exit_code() {
        let scratch = Scratch::new("pdt_cmd_build_fail");
        scratch.write("docs/project-description.md", PROJECT);
        let ctx = replay(vec![shell_exits(2, "")]);

        let err = run(&ctx, &scratch.config, "deploy").unwrap_err();
        assert!(matches!(err, PdtError::ShellFailed { ref command, exit_code: 2 } if command == "./deploy.sh"));
    }

    #[test]
    fn undeclared_command_is_not_found() {
        let scratch = Scratch::new("pdt_cmd_build_missing");
        scratch.write("docs/project-description.md", "# P\n\n## Commands\n- build: `make`\n");
        let ctx = replay(vec![]);

        let err = run(&ctx, &scratch.config, "deploy").unwrap_err();
        assert!(matches!(err, PdtError::CommandNotFound { .. }));
    }
}
