//! `pdt refine` command: expand the active task into a plan.

use tracing::info;

use super::{active_task, ask_agent, load_project, read_document};
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::ports::AgentRequest;
use crate::prompt;
use crate::ui;
use crate::workspace::{PLAN_FILE, TASK_FILE};

/// Execute the `refine` command, writing `<task>/plan.md`.
///
/// # Errors
///
/// Returns an error if there is not exactly one active task, a document cannot
/// be read, or the agent fails.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig) -> Result<()> {
    let task_dir = active_task(ctx, config)?;
    let project = load_project(ctx, config)?;
    let task = read_document(ctx, &task_dir.join(TASK_FILE))?;

    ui::step("Refining task into a technical plan...");
    let request = AgentRequest::new(
        prompt::refine_task(project.content(), &task),
        config.agent.planner_model.as_deref(),
    );
    let response = ask_agent(ctx, &request)?;

    let plan_path = task_dir.join(PLAN_FILE);
    ctx.fs
        .write(&plan_path, &response.text)
        .map_err(|e| PdtError::port(format!("error writing {}", plan_path.display()), e))?;
    info!(plan = %plan_path.display(), "wrote plan");
    ui::success(format!("Plan written to {}", plan_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{agent_says, replay, Scratch};

    #[test]
    fn writes_plan_next_to_task() {
        let scratch = Scratch::new("pdt_cmd_refine_plan");
        scratch.write("docs/project-description.md", "# Project\n");
        scratch.write("docs/todos/work/t1/task.md", "# Task: Add login\n");
        let ctx = replay(vec![agent_says("## Plan\n1. Add form\n")]);

        run(&ctx, &scratch.config).unwrap();
        assert_eq!(scratch.read("docs/todos/work/t1/plan.md"), "## Plan\n1. Add form\n");
    }

    #[test]
    fn requires_an_active_task() {
        let scratch = Scratch::new("pdt_cmd_refine_none");
        let ctx = replay(vec![]);
        assert!(matches!(run(&ctx, &scratch.config), Err(PdtError::NoActiveTask { .. })));
    }
}
