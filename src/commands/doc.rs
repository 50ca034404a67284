//! `pdt doc` command: update the handbook for an implemented feature.

use std::path::{Path, PathBuf};

use super::output::write_code_blocks;
use super::{ask_agent, read_document};
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::ports::AgentRequest;
use crate::prompt;
use crate::ui;

/// Execute the `doc` command.
///
/// The agent sees the spec and the named code files; documentation blocks are
/// written below the handbook directory.
///
/// # Errors
///
/// Returns an error if the spec or a code file cannot be read, the agent
/// fails, or a file cannot be written.
pub fn run(
    ctx: &ServiceContext,
    config: &WorkflowConfig,
    root: &Path,
    spec: &Path,
    code: &[PathBuf],
) -> Result<()> {
    let spec_path = root.join(spec);
    if !ctx.fs.exists(&spec_path) {
        return Err(PdtError::Usage(format!("spec file '{}' does not exist", spec.display())));
    }
    let spec = read_document(ctx, &spec_path)?;

    let mut files = Vec::with_capacity(code.len());
    for path in code {
        let content = read_document(ctx, &root.join(path))?;
        files.push((path.display().to_string(), content));
    }

    ui::step("Generating documentation...");
    let response = ask_agent(ctx, &AgentRequest::new(prompt::doc_generation(&spec, &files), None))?;

    let report = write_code_blocks(ctx.fs.as_ref(), &config.paths.handbook_dir, &response.text)?;
    ui::success(format!("Documentation updated: {} file(s) written.", report.written.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{agent_says, replay, Scratch};

    #[test]
    fn writes_docs_into_handbook() {
        let scratch = Scratch::new("pdt_cmd_doc_write");
        scratch.write("spec.md", "# Parser\n");
        scratch.write("src/parser.rs", "pub fn parse() {}\n");
        let ctx = replay(vec![agent_says("```markdown // parser.md\n# Parser\nUse `parse`.\n```\n")]);

        run(&ctx, &scratch.config, &scratch.root, Path::new("spec.md"), &[PathBuf::from("src/parser.rs")])
            .unwrap();
        assert_eq!(scratch.read("docs/handbook/parser.md"), "# Parser\nUse `parse`.\n");
    }

    #[test]
    fn missing_spec_is_a_usage_error() {
        let scratch = Scratch::new("pdt_cmd_doc_nospec");
        let ctx = replay(vec![]);
        let err = run(&ctx, &scratch.config, &scratch.root, Path::new("missing.md"), &[]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn missing_code_file_is_an_error() {
        let scratch = Scratch::new("pdt_cmd_doc_nocode");
        scratch.write("spec.md", "# Parser\n");
        let ctx = replay(vec![]);
        let err = run(&ctx, &scratch.config, &scratch.root, Path::new("spec.md"), &[PathBuf::from("gone.rs")])
            .unwrap_err();
        assert!(err.to_string().contains("gone.rs"));
    }
}
