//! `pdt implement` command: generate code for the active task.

use std::path::Path;

use super::output::write_code_blocks;
use super::{active_task, ask_agent, load_project, read_document};
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::ports::AgentRequest;
use crate::prompt;
use crate::ui;
use crate::workspace::{PLAN_FILE, TASK_FILE};

/// Execute the `implement` command.
///
/// The prompt carries the project description, the task and, when present,
/// the plan from `pdt refine`. Annotated code blocks in the reply are written
/// relative to the project root.
///
/// # Errors
///
/// Returns an error if there is not exactly one active task, a document cannot
/// be read, the agent fails, or a file cannot be written.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig, root: &Path) -> Result<()> {
    let task_dir = active_task(ctx, config)?;
    let project = load_project(ctx, config)?;
    let task = read_document(ctx, &task_dir.join(TASK_FILE))?;
    let plan_path = task_dir.join(PLAN_FILE);
    let plan = if ctx.fs.exists(&plan_path) { Some(read_document(ctx, &plan_path)?) } else { None };

    ui::step("Implementing the active task...");
    let request = AgentRequest::new(
        prompt::master_implementation(project.content(), &task, plan.as_deref()),
        config.agent.coder_model.as_deref(),
    );
    let response = ask_agent(ctx, &request)?;

    let report = write_code_blocks(ctx.fs.as_ref(), root, &response.text)?;
    ui::success(format!(
        "Implementation written: {} file(s), {} block(s) skipped.",
        report.written.len(),
        report.skipped
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{agent_says, replay, Scratch};

    #[test]
    fn writes_generated_files() {
        let scratch = Scratch::new("pdt_cmd_implement_write");
        scratch.write("docs/project-description.md", "# Project\n");
        scratch.write("docs/todos/work/t1/task.md", "# Task: Greet\n");
        scratch.write("docs/todos/work/t1/plan.md", "1. add greet\n");
        let ctx = replay(vec![agent_says("```rust // src/greet.rs\npub fn greet() {}\n```\n")]);

        run(&ctx, &scratch.config, &scratch.root).unwrap();
        assert_eq!(scratch.read("src/greet.rs"), "pub fn greet() {}\n");
    }

    #[test]
    fn missing_project_description_is_an_error() {
        let scratch = Scratch::new("pdt_cmd_implement_noproject");
        scratch.write("docs/todos/work/t1/task.md", "# Task: Greet\n");
        let ctx = replay(vec![]);

        let err = run(&ctx, &scratch.config, &scratch.root).unwrap_err();
        assert!(err.to_string().contains("project-description.md"));
    }
}
