//! Command dispatch and handlers.

pub mod build;
pub mod code;
pub mod commit;
pub mod doc;
pub mod implement;
pub mod output;
pub mod refine;
pub mod spec;
pub mod todo;
pub mod validate;
pub mod write;

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::WorkflowConfig;
use crate::context::ServiceContext;
use crate::error::{PdtError, Result};
use crate::markdown::ProjectDescription;
use crate::ports::{AgentRequest, AgentResponse};
use crate::ui;
use crate::workspace::TaskWorkspace;

/// Records every port interaction into the named cassette file.
pub const RECORD_ENV: &str = "PDT_RECORD";
/// Serves port interactions from the named cassette file.
pub const REPLAY_ENV: &str = "PDT_REPLAY";

/// Dispatch a parsed command to its handler in the current directory.
///
/// `PDT_REPLAY=<file>` serves the agent, shell, git, clock and prompter from a
/// cassette; `PDT_RECORD=<file>` records them into one.
///
/// # Errors
///
/// Returns an error if configuration or cassette loading fails, or if the
/// selected command handler fails.
pub fn dispatch(command: &Command) -> Result<()> {
    let root = env::current_dir().map_err(|e| PdtError::io("error reading current directory", e))?;
    let config = WorkflowConfig::load(&root)?.rooted_at(&root);

    if let Ok(path) = env::var(REPLAY_ENV) {
        info!(cassette = %path, "replaying");
        let ctx = ServiceContext::replaying_from(Path::new(&path))?;
        return dispatch_with_context(command, &ctx, &config, &root);
    }

    if let Ok(path) = env::var(RECORD_ENV) {
        let session = RecordingSession::new(Path::new(&path), &command_name(command))?;
        let ctx = ServiceContext::recording(&config, &session);
        let result = dispatch_with_context(command, &ctx, &config, &root);
        // Adapters hold recorder handles until the context is gone.
        drop(ctx);
        let saved = session.finish()?;
        ui::success(format!("Recording saved to {}", saved.display()));
        return result;
    }

    let ctx = ServiceContext::live(&config);
    dispatch_with_context(command, &ctx, &config, &root)
}

/// Dispatch a command with the given service context, configuration and
/// project root.
///
/// # Errors
///
/// Returns the handler's error.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &WorkflowConfig,
    root: &Path,
) -> Result<()> {
    match command {
        Command::Todo => todo::run(ctx, config),
        Command::Spec { goal } => spec::run(ctx, config, root, goal),
        Command::Code { spec, dry_run } => code::run(ctx, config, root, spec.as_deref(), *dry_run),
        Command::Test { spec } => test::run(ctx, root, spec),
        Command::Doc { spec, code } => doc::run(ctx, config, root, spec, code),
        Command::Write { kind, topic } => write::run(ctx, config, kind, topic),
        Command::Refine => refine::run(ctx, config),
        Command::Implement => implement::run(ctx, config, root),
        Command::Build => build::run(ctx, config, "build"),
        Command::Deploy => build::run(ctx, config, "deploy"),
        Command::Validate => validate::run(ctx, config),
        Command::Commit { yes } => commit::run(ctx, config, *yes),
    }
}

fn command_name(command: &Command) -> String {
    let name = match command {
        Command::Todo => "todo",
        Command::Spec { .. } => "spec",
        Command::Code { .. } => "code",
        Command::Test { .. } => "test",
        Command::Doc { .. } => "doc",
        Command::Write { .. } => "write",
        Command::Refine => "refine",
        Command::Implement => "implement",
        Command::Build => "build",
        Command::Deploy => "deploy",
        Command::Validate => "validate",
        Command::Commit { .. } => "commit",
    };
    format!("pdt {name}")
}

/// Runs one agent request to completion on a current-thread runtime.
///
/// # Errors
///
/// Returns [`PdtError::Agent`] if the agent fails.
pub(crate) fn ask_agent(ctx: &ServiceContext, request: &AgentRequest) -> Result<AgentResponse> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| PdtError::io("failed to start async runtime", e))?;
    runtime
        .block_on(ctx.agent.run(request))
        .map_err(|e| PdtError::Agent(e.to_string()))
}

/// Reads a text document through the filesystem port.
pub(crate) fn read_document(ctx: &ServiceContext, path: &Path) -> Result<String> {
    ctx.fs
        .read_to_string(path)
        .map_err(|e| PdtError::port(format!("error reading {}", path.display()), e))
}

/// Loads the project description document.
pub(crate) fn load_project(ctx: &ServiceContext, config: &WorkflowConfig) -> Result<ProjectDescription> {
    ProjectDescription::load(ctx.fs.as_ref(), &config.paths.project_description)
}

/// Returns the active task directory.
pub(crate) fn active_task(ctx: &ServiceContext, config: &WorkflowConfig) -> Result<PathBuf> {
    TaskWorkspace::new(ctx.fs.as_ref(), &config.paths).active_task()
}
