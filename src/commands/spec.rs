//! `pdt spec` command: turn a goal into a numbered specification.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::ask_agent;
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::ports::AgentRequest;
use crate::prompt;
use crate::response::{ClarifyingQuestion, PlannerResponse};
use crate::ui;
use crate::workspace::slugify;

static SPEC_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^s(\d+)-.*\.md$").expect("valid regex"));

const SLUG_LEN: usize = 30;

/// Execute the `spec` command.
///
/// The goal comes from the arguments or, when there are none, from a prompt.
/// The planner drafts a spec and may ask questions; answers are fed back for a
/// refined draft, which is saved as `s<NNN>-<slug>.md`.
///
/// # Errors
///
/// Returns an error if the agent fails, its first reply carries no planner
/// JSON, or the spec cannot be saved.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig, root: &Path, goal: &[String]) -> Result<()> {
    let specs_dir = &config.paths.specs_dir;
    ctx.fs
        .create_dir_all(specs_dir)
        .map_err(|e| PdtError::port(format!("error creating {}", specs_dir.display()), e))?;

    let goal = if goal.is_empty() {
        ctx.prompter
            .input("What is your high-level goal?")
            .map_err(|e| PdtError::port("error reading goal", e))?
    } else {
        goal.join(" ")
    };
    if goal.trim().is_empty() {
        return Err(PdtError::Usage("a goal is required".into()));
    }

    let model = config.agent.planner_model.as_deref();
    let listing = prompt::project_file_listing(root, &config.paths.context_ignore);

    ui::step("Generating initial spec draft and questions...");
    let draft = ask_agent(ctx, &AgentRequest::new(prompt::planner(&goal, &listing), model))?;
    let mut planner = PlannerResponse::parse(&draft.text)?;

    if !planner.clarifying_questions.is_empty() {
        ui::warn("The planner has clarifying questions:");
        let answered = ask_questions(ctx, planner.clarifying_questions)?;

        ui::step("Refining spec based on your answers...");
        let request = AgentRequest::new(prompt::refine_spec(&goal, &planner.draft_spec, &answered), model);
        let refined = ask_agent(ctx, &request)?;
        planner.draft_spec = match PlannerResponse::parse(&refined.text) {
            Ok(response) => response.draft_spec,
            Err(e) => {
                debug!(error = %e, "refined reply is plain markdown");
                refined.text
            }
        };
        planner.clarifying_questions = answered;
    }

    let existing = ctx
        .fs
        .list_dir(specs_dir)
        .map_err(|e| PdtError::port(format!("error reading {}", specs_dir.display()), e))?;
    let path = specs_dir.join(next_spec_filename(&existing, &goal));
    ctx.fs
        .write(&path, &planner.draft_spec)
        .map_err(|e| PdtError::port(format!("error writing {}", path.display()), e))?;

    info!(path = %path.display(), "saved spec");
    ui::success(format!("Specification saved to {}", path.display()));
    Ok(())
}

fn ask_questions(ctx: &ServiceContext, questions: Vec<ClarifyingQuestion>) -> Result<Vec<ClarifyingQuestion>> {
    questions
        .into_iter()
        .map(|mut q| {
            q.answer = ctx
                .prompter
                .input(&q.question)
                .map_err(|e| PdtError::port("error reading answer", e))?;
            Ok(q)
        })
        .collect()
}

/// Picks `s<NNN>-<slug>.md`, numbered one past the highest existing spec.
#[must_use]
pub fn next_spec_filename(existing: &[String], goal: &str) -> String {
    let highest = existing
        .iter()
        .filter_map(|name| SPEC_FILE.captures(name))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("s{:03}-{}.md", highest + 1, slugify(goal, Some(SLUG_LEN)))
}
