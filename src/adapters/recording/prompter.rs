//! Recording adapter for the `Prompter` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortError;
use crate::ports::Prompter;

/// Records the user's answers while delegating to an inner prompter.
pub struct RecordingPrompter {
    inner: Box<dyn Prompter>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPrompter {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Prompter>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct Question<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a [String]>,
}

impl Prompter for RecordingPrompter {
    fn confirm(&self, message: &str) -> Result<bool, PortError> {
        let result = self.inner.confirm(message);
        let input = Question { message, options: None };
        record_result(&self.recorder, "prompter", "confirm", &input, &result);
        result
    }

    fn select(&self, message: &str, options: &[String]) -> Result<usize, PortError> {
        let result = self.inner.select(message, options);
        let input = Question { message, options: Some(options) };
        record_result(&self.recorder, "prompter", "select", &input, &result);
        result
    }

    fn input(&self, message: &str) -> Result<String, PortError> {
        let result = self.inner.input(message);
        let input = Question { message, options: None };
        record_result(&self.recorder, "prompter", "input", &input, &result);
        result
    }
}
