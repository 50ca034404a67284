//! `pdt code` command: hand a whole spec to the agent.

use std::path::Path;

use super::{ask_agent, read_document};
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::markdown::parse_spec_operations;
use crate::ports::AgentRequest;
use crate::prompt;
use crate::ui;

/// Execute the `code` command.
///
/// Reads the spec (the configured default when `spec` is `None`), lists the
/// file operations it declares and, unless `dry_run`, asks the agent to
/// implement it. The agent writes files itself; its summary is printed.
///
/// # Errors
///
/// Returns an error if the spec cannot be read or the agent fails.
pub fn run(
    ctx: &ServiceContext,
    config: &WorkflowConfig,
    root: &Path,
    spec: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    ui::warn("Run this on a dedicated feature branch; the agent rewrites files in place.");

    let spec_path = spec.map_or_else(|| config.paths.default_spec.clone(), |p| root.join(p));
    ui::step(format!("Reading specification from {}", spec_path.display()));
    let content = read_document(ctx, &spec_path)
        .inspect_err(|_| ui::warn("Generate a spec with `pdt spec` first."))?;

    if content.trim().is_empty() {
        ui::warn("Spec file is empty. Nothing to do.");
        return Ok(());
    }

    let operations = parse_spec_operations(&content);
    if operations.is_empty() {
        ui::warn("No CREATE/MODIFY operations found; the agent will work from the prose.");
    } else {
        println!("Planned file operations:");
        for op in &operations {
            println!("  {:<6} {}", op.kind, op.file_path);
        }
    }

    if dry_run {
        ui::success("Dry run: nothing sent to the agent.");
        return Ok(());
    }

    let name = spec_path.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    ui::step(format!("Agent is implementing {name}..."));
    let request = AgentRequest::new(prompt::implement_spec(&content), config.agent.coder_model.as_deref());
    let response = ask_agent(ctx, &request)?;

    ui::success("Agent finished implementation.");
    println!("{}", response.text.trim_end());
    Ok(())
}
