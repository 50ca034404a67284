//! Replaying adapter for the `ShellExecutor` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::{ShellExecutor, ShellOutput};

/// Serves recorded command output without spawning anything.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a replaying executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, _command: &str) -> Result<ShellOutput, PortError> {
        replay_result(next_output(&self.replayer, "shell", "run"), "shell::run")
    }
}
