//! Replaying adapters that serve recorded interactions back.
//!
//! Each adapter owns its own [`CassetteReplayer`] over the same cassette, so
//! every port keeps an independent cursor.

pub mod agent;
pub mod clock;
pub mod git;
pub mod prompter;
pub mod shell;

pub use agent::ReplayingAgentRunner;
pub use clock::ReplayingClock;
pub use git::ReplayingGitRepo;
pub use prompter::ReplayingPrompter;
pub use shell::ReplayingShellExecutor;

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;

/// Pops the next recorded output for `port::method`.
pub(crate) fn next_output(replayer: &Mutex<CassetteReplayer>, port: &str, method: &str) -> Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Turns a recorded `{"ok": v}` / `{"err": "..."}` value back into a `Result`.
pub(crate) fn replay_result<T: DeserializeOwned>(output: Value, context: &str) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        let message = err.as_str().unwrap_or("unknown error").to_string();
        return Err(message.into());
    }
    let value = match output {
        Value::Object(mut map) if map.contains_key("ok") => map.remove("ok").unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(value).map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
