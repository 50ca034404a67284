//! Replaying adapter for the `Prompter` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::Prompter;

/// Answers prompts with the recorded answers.
pub struct ReplayingPrompter {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingPrompter {
    /// Creates a replaying prompter from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Prompter for ReplayingPrompter {
    fn confirm(&self, _message: &str) -> Result<bool, PortError> {
        replay_result(next_output(&self.replayer, "prompter", "confirm"), "prompter::confirm")
    }

    fn select(&self, _message: &str, options: &[String]) -> Result<usize, PortError> {
        let index: usize =
            replay_result(next_output(&self.replayer, "prompter", "select"), "prompter::select")?;
        if index >= options.len() {
            return Err(format!(
                "prompter::select: recorded choice {index} but only {} options offered",
                options.len()
            )
            .into());
        }
        Ok(index)
    }

    fn input(&self, _message: &str) -> Result<String, PortError> {
        replay_result(next_output(&self.replayer, "prompter", "input"), "prompter::input")
    }
}
