//! Recording adapter for the `AgentRunner` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{AgentFuture, AgentRequest, AgentRunner};

/// Records agent prompts and responses while delegating to an inner runner.
pub struct RecordingAgentRunner {
    inner: Box<dyn AgentRunner>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingAgentRunner {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn AgentRunner>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl AgentRunner for RecordingAgentRunner {
    fn run(&self, request: &AgentRequest) -> AgentFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let result = self.inner.run(&request).await;
            record_result(&self.recorder, "agent", "run", &request, &result);
            result
        })
    }
}
