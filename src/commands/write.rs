//! `pdt write` command: generate external-facing content.

use super::output::write_code_blocks;
use super::ask_agent;
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::ports::AgentRequest;
use crate::prompt;
use crate::ui;

/// Execute the `write` command for a content `kind` (blog, tweet, ...) and topic.
///
/// # Errors
///
/// Returns an error if the agent fails or a file cannot be written.
pub fn run(ctx: &ServiceContext, config: &WorkflowConfig, kind: &str, topic: &str) -> Result<()> {
    ui::step(format!("Generating {kind} content about '{topic}'..."));
    let response = ask_agent(ctx, &AgentRequest::new(prompt::content_generation(kind, topic), None))?;

    let report = write_code_blocks(ctx.fs.as_ref(), &config.paths.content_dir, &response.text)?;
    if report.written.is_empty() {
        ui::section("Agent output:", &response.text);
    }
    ui::success("Content generation complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{agent_says, replay, Scratch};

    #[test]
    fn writes_content_below_content_dir() {
        let scratch = Scratch::new("pdt_cmd_write_blog");
        let ctx = replay(vec![agent_says("```markdown // blog/launch.md\n# We shipped\n```\n")]);

        run(&ctx, &scratch.config, "blog", "launch").unwrap();
        assert_eq!(scratch.read("content/blog/launch.md"), "# We shipped\n");
    }

    #[test]
    fn unannotated_output_writes_nothing() {
        let scratch = Scratch::new("pdt_cmd_write_plain");
        let ctx = replay(vec![agent_says("Just a tweet, no fences.")]);

        run(&ctx, &scratch.config, "tweet", "launch").unwrap();
        assert!(!scratch.exists("content"));
    }
}
