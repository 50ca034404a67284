//! Replaying adapter for the `GitRepo` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;
use crate::ports::GitRepo;

/// Replays recorded git operations from a cassette.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl GitRepo for ReplayingGitRepo {
    fn diff(&self) -> Result<String, PortError> {
        replay_result(next_output(&self.replayer, "git", "diff"), "git::diff")
    }

    fn add_all(&self) -> Result<(), PortError> {
        replay_result(next_output(&self.replayer, "git", "add_all"), "git::add_all")
    }

    fn commit(&self, _message: &str) -> Result<(), PortError> {
        replay_result(next_output(&self.replayer, "git", "commit"), "git::commit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer;
    use serde_json::json;

    #[test]
    fn replays_diff_and_commit() {
        let git = ReplayingGitRepo::new(replayer(vec![
            ("git", "diff", json!({"ok": "--- a/file\n+++ b/file"})),
            ("git", "add_all", json!({"ok": null})),
            ("git", "commit", json!({"err": "pre-commit hook failed"})),
        ]));
        assert!(git.diff().unwrap().contains("--- a/file"));
        git.add_all().unwrap();
        assert_eq!(git.commit("msg").unwrap_err().to_string(), "pre-commit hook failed");
    }
}
