//! AI agent port.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// Boxed future type alias used by [`AgentRunner`] to keep the trait dyn-compatible.
pub type AgentFuture<'a> = Pin<Box<dyn Future<Output = Result<AgentResponse, PortError>> + Send + 'a>>;

/// A single prompt handed to the agent process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    /// Model override; the agent's own default is used when `None`.
    pub model: Option<String>,
    /// The full prompt text.
    pub prompt: String,
}

impl AgentRequest {
    /// Builds a request for `prompt` with an optional model.
    pub fn new(prompt: impl Into<String>, model: Option<&str>) -> Self {
        Self { model: model.map(str::to_string), prompt: prompt.into() }
    }
}

/// What the agent printed to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Captured standard output.
    pub text: String,
}

/// Runs prompts through an external AI agent.
pub trait AgentRunner: Send + Sync {
    /// Sends `request` to the agent and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent cannot be started or exits unsuccessfully.
    fn run(&self, request: &AgentRequest) -> AgentFuture<'_>;
}
