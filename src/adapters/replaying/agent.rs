//! Replaying adapter for the `AgentRunner` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{AgentFuture, AgentRequest, AgentRunner};

/// Serves recorded agent responses without spawning the agent.
pub struct ReplayingAgentRunner {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingAgentRunner {
    /// Creates a replaying agent from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl AgentRunner for ReplayingAgentRunner {
    fn run(&self, _request: &AgentRequest) -> AgentFuture<'_> {
        let output = next_output(&self.replayer, "agent", "run");
        Box::pin(async move { replay_result(output, "agent::run") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer;
    use serde_json::json;

    #[tokio::test]
    async fn replays_agent_text() {
        let agent = ReplayingAgentRunner::new(replayer(vec![
            ("agent", "run", json!({"ok": {"text": "```rust // src/lib.rs\nfn a() {}\n```\n"}})),
            ("agent", "run", json!({"err": "command 'gemini' finished with error: exit status: 1"})),
        ]));
        let first = agent.run(&AgentRequest::new("p", None)).await.unwrap();
        assert!(first.text.contains("src/lib.rs"));
        let second = agent.run(&AgentRequest::new("p", None)).await;
        assert!(second.unwrap_err().to_string().contains("gemini"));
    }
}
