//! `pdt commit` command: commit the work and archive the task.

use tracing::warn;

use super::{active_task, ask_agent, read_document};
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::ports::AgentRequest;
use crate::prompt;
use crate::response::clean_commit_message;
use crate::ui;
use crate::workspace::{TaskWorkspace, TASK_FILE};

/// Execute the `commit` command.
///
/// Shows the diff, asks for confirmation (skipped with `yes`), commits with an
/// agent-written message and archives the task. Archiving problems after a
/// successful commit are reported as warnings.
///
/// # Errors
///
/// Returns an error if there is not exactly one active task, or if the diff,
/// the agent, `git add` or `git commit` fails.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig, yes: bool) -> Result<()> {
    let task_dir = active_task(ctx, config)?;

    ui::step("Displaying git diff for review...");
    let diff = ctx.git.diff().map_err(|e| PdtError::port("error running git diff", e))?;
    println!("{diff}");

    if !yes {
        let confirmed = ctx
            .prompter
            .confirm("Commit these changes?")
            .map_err(|e| PdtError::port("error reading confirmation", e))?;
        if !confirmed {
            ui::warn("Commit aborted.");
            return Ok(());
        }
    }

    ui::step("Generating commit message...");
    let task = read_document(ctx, &task_dir.join(TASK_FILE))?;
    let response = ask_agent(ctx, &AgentRequest::new(prompt::commit_message(&task), None))?;
    let message = clean_commit_message(&response.text);
    if message.is_empty() {
        return Err(PdtError::Agent("commit message was empty".into()));
    }
    ui::section("Commit message:", &message);

    ctx.git.add_all().map_err(|e| PdtError::port("error adding files to git", e))?;
    ctx.git.commit(&message).map_err(|e| PdtError::port("error committing changes", e))?;
    let name = task_dir.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    ui::success(format!("Changes committed for task {name}."));

    match TaskWorkspace::new(ctx.fs.as_ref(), &config.paths).archive(&task_dir) {
        Ok(archived) => ui::success(format!("Task archived to {}.", archived.display())),
        Err(e) => {
            warn!(error = %e, "archiving failed after commit");
            ui::warn(format!("Committed, but the task could not be archived: {e}"));
        }
    }
    Ok(())
}
