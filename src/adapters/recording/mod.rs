//! Recording adapters that capture interactions to a cassette.

pub mod agent;
pub mod clock;
pub mod git;
pub mod prompter;
pub mod shell;

pub use agent::RecordingAgentRunner;
pub use clock::RecordingClock;
pub use git::RecordingGitRepo;
pub use prompter::RecordingPrompter;
pub use shell::RecordingShellExecutor;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::recorder::CassetteRecorder;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Record an interaction whose method cannot fail.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize + ?Sized,
    O: Serialize + ?Sized,
{
    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, to_json(input), to_json(output));
}

/// Record a fallible interaction as `{"ok": v}` or `{"err": "message"}`.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize + ?Sized,
{
    let output = match result {
        Ok(v) => json!({ "ok": to_json(v) }),
        Err(e) => json!({ "err": e.to_string() }),
    };
    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, to_json(input), output);
}
