//! `pdt todo` command: pick a backlog item and start working on it.

use tracing::info;

use super::{ask_agent, read_document};
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::markdown::{parse_todo, render_todo};
use crate::ports::AgentRequest;
use crate::prompt;
use crate::ui;
use crate::workspace::TaskWorkspace;

/// Execute the `todo` command.
///
/// Prepares the docs layout, generates a project description when there is
/// none, then moves the chosen backlog entry into a new task directory.
///
/// # Errors
///
/// Returns an error if a task is already active, the agent fails, or the
/// workspace files cannot be read or written.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig) -> Result<()> {
    let workspace = TaskWorkspace::new(ctx.fs.as_ref(), &config.paths);
    workspace.ensure_layout()?;

    if !ctx.fs.exists(&config.paths.project_description)
        && !generate_project_description(ctx, config)?
    {
        return Ok(());
    }

    let todo_file = &config.paths.todo_file;
    if !ctx.fs.exists(todo_file) {
        ctx.fs
            .write(todo_file, "")
            .map_err(|e| PdtError::port(format!("error creating {}", todo_file.display()), e))?;
    }

    let tasks = parse_todo(&read_document(ctx, todo_file)?);
    if tasks.is_empty() {
        ui::warn(format!("No tasks found in {}. Add some tasks and try again.", todo_file.display()));
        return Ok(());
    }

    match workspace.active_task() {
        Ok(path) => return Err(PdtError::TaskAlreadyActive { path }),
        Err(PdtError::NoActiveTask { .. }) => {}
        Err(other) => return Err(other),
    }

    let choice = ctx
        .prompter
        .select("Choose a task to begin:", &tasks)
        .map_err(|e| PdtError::port("error reading task choice", e))?;
    let selected = &tasks[choice];

    let task_dir = workspace.start_task(selected, ctx.clock.now())?;
    let remaining: Vec<String> = tasks.iter().filter(|t| *t != selected).cloned().collect();
    ctx.fs
        .write(todo_file, &render_todo(&remaining))
        .map_err(|e| PdtError::port(format!("error writing {}", todo_file.display()), e))?;

    info!(task = %selected, remaining = remaining.len(), "task started");
    ui::success(format!("Initialized workspace for task: {selected} ({})", task_dir.display()));
    Ok(())
}

/// Writes an agent-generated project description. Returns `false` when the
/// user wants to review it before continuing.
fn generate_project_description(ctx: &ServiceContext, config: &WorkflowConfig) -> Result<bool> {
    let path = &config.paths.project_description;
    ui::step("Generating initial project description...");
    let response = ask_agent(ctx, &AgentRequest::new(prompt::project_description(), None))?;
    ctx.fs
        .write(path, &response.text)
        .map_err(|e| PdtError::port(format!("error writing {}", path.display()), e))?;
    ui::success(format!("Project description generated in {}", path.display()));

    let review = ctx
        .prompter
        .confirm(&format!("Review and edit {} before continuing?", path.display()))
        .map_err(|e| PdtError::port("error reading confirmation", e))?;
    if review {
        ui::warn(format!("Edit {} and run `pdt todo` again.", path.display()));
    }
    Ok(!review)
}
