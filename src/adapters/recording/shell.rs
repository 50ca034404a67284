//! Recording adapter for the `ShellExecutor` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortError;
use crate::ports::{ShellExecutor, ShellOutput};

/// Records shell commands and their output while delegating to an inner executor.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct CommandInput<'a> {
    command: &'a str,
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, PortError> {
        let result = self.inner.run(command);
        record_result(&self.recorder, "shell", "run", &CommandInput { command }, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveShellExecutor;
    use crate::adapters::recording::test_support::finish;

    #[test]
    fn records_command_and_output() {
        let path = std::env::temp_dir().join("pdt_rec_shell.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "shell", "abc")));
        {
            let shell =
                RecordingShellExecutor::new(Box::new(LiveShellExecutor::new("sh")), Arc::clone(&recorder));
            let out = shell.run("echo recorded").unwrap();
            assert!(out.success());
        }

        let interactions = finish(recorder, &path);
        assert_eq!(interactions.len(), 1);
        assert_eq!(interactions[0].port, "shell");
        assert_eq!(interactions[0].input["command"], "echo recorded");
        assert_eq!(interactions[0].output["ok"]["exit_code"], 0);
        assert_eq!(interactions[0].output["ok"]["stdout"], "recorded\n");
    }

    #[test]
    fn records_spawn_failures_as_err() {
        let path = std::env::temp_dir().join("pdt_rec_shell_err.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "shell", "abc")));
        {
            let shell = RecordingShellExecutor::new(
                Box::new(LiveShellExecutor::new("pdt-no-such-shell")),
                Arc::clone(&recorder),
            );
            assert!(shell.run("true").is_err());
        }

        let interactions = finish(recorder, &path);
        assert!(interactions[0].output["err"].as_str().unwrap().contains("pdt-no-such-shell"));
    }
}
