//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::{
    LiveAgentRunner, LiveClock, LiveFileSystem, LiveGitRepo, LivePrompter, LiveShellExecutor,
};
use crate::adapters::recording::{
    RecordingAgentRunner, RecordingClock, RecordingGitRepo, RecordingPrompter,
    RecordingShellExecutor,
};
use crate::adapters::replaying::{
    ReplayingAgentRunner, ReplayingClock, ReplayingGitRepo, ReplayingPrompter,
    ReplayingShellExecutor,
};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::ports::{AgentRunner, Clock, FileSystem, GitRepo, Prompter, ShellExecutor};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire up
/// live, recording or replaying adapters; the filesystem is always live so
/// replayed commands operate on a real scratch directory.
pub struct ServiceContext {
    /// Filesystem for document and output files.
    pub fs: Box<dyn FileSystem>,
    /// Shell for project commands.
    pub shell: Box<dyn ShellExecutor>,
    /// Git repository in the current directory.
    pub git: Box<dyn GitRepo>,
    /// External AI agent.
    pub agent: Box<dyn AgentRunner>,
    /// Clock for task timestamps.
    pub clock: Box<dyn Clock>,
    /// Interactive prompts.
    pub prompter: Box<dyn Prompter>,
}

impl ServiceContext {
    /// Creates a context backed by the real agent, shell, git and terminal.
    #[must_use]
    pub fn live(config: &WorkflowConfig) -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            shell: Box::new(LiveShellExecutor::new(&config.shell)),
            git: Box::new(LiveGitRepo),
            agent: Box::new(LiveAgentRunner::new(&config.agent)),
            clock: Box::new(LiveClock),
            prompter: Box::new(LivePrompter),
        }
    }

    /// Creates a live context whose interactions are written into `session`.
    #[must_use]
    pub fn recording(config: &WorkflowConfig, session: &RecordingSession) -> Self {
        let live = Self::live(config);
        Self {
            fs: live.fs,
            shell: Box::new(RecordingShellExecutor::new(live.shell, session.recorder())),
            git: Box::new(RecordingGitRepo::new(live.git, session.recorder())),
            agent: Box::new(RecordingAgentRunner::new(live.agent, session.recorder())),
            clock: Box::new(RecordingClock::new(live.clock, session.recorder())),
            prompter: Box::new(RecordingPrompter::new(live.prompter, session.recorder())),
        }
    }

    /// Creates a context that serves every port except the filesystem from a
    /// cassette.
    #[must_use]
    pub fn replaying(cassette: &Cassette) -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(cassette))),
            git: Box::new(ReplayingGitRepo::new(CassetteReplayer::new(cassette))),
            agent: Box::new(ReplayingAgentRunner::new(CassetteReplayer::new(cassette))),
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(cassette))),
            prompter: Box::new(ReplayingPrompter::new(CassetteReplayer::new(cassette))),
        }
    }

    /// Loads a cassette file and builds a replaying context from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying_from(path: &Path) -> Result<Self> {
        Ok(Self::replaying(&Cassette::load(path)?))
    }
}
