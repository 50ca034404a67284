//! Live adapter for the `AgentRunner` port: spawns the agent CLI.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::AgentConfig;
use crate::error::PortError;
use crate::ports::agent::{AgentFuture, AgentRequest, AgentResponse, AgentRunner};

/// Runs prompts through an agent CLI such as `gemini`.
///
/// The agent's stdout and stderr are echoed to the terminal as they arrive
/// (when `stream` is enabled) and captured at the same time.
pub struct LiveAgentRunner {
    program: String,
    model_flag: String,
    prompt_flag: String,
    stream: bool,
}

impl LiveAgentRunner {
    /// Creates a runner from the agent configuration.
    #[must_use]
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            program: config.program.clone(),
            model_flag: config.model_flag.clone(),
            prompt_flag: config.prompt_flag.clone(),
            stream: config.stream,
        }
    }

    /// Builds the argument list for one request.
    fn args(&self, request: &AgentRequest) -> Vec<String> {
        let mut args = Vec::with_capacity(4);
        if let Some(model) = &request.model {
            args.push(self.model_flag.clone());
            args.push(model.clone());
        }
        if !self.prompt_flag.is_empty() {
            args.push(self.prompt_flag.clone());
        }
        args.push(request.prompt.clone());
        args
    }
}

/// Prefers a binary shipped next to the running executable, then `PATH`.
fn resolve_program(program: &str) -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(program)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(program))
}

/// Copies `reader` into `sink` (when `echo` is set) while capturing everything read.
async fn tee<R, W>(mut reader: R, mut sink: W, echo: bool) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut captured = Vec::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        if echo {
            sink.write_all(&buf[..n]).await?;
            sink.flush().await?;
        }
        captured.extend_from_slice(&buf[..n]);
    }
    Ok(String::from_utf8_lossy(&captured).into_owned())
}

async fn spawn_agent(
    program: PathBuf,
    name: String,
    args: Vec<String>,
    echo: bool,
) -> Result<AgentResponse, PortError> {
    let mut child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("error starting command '{name}': {e}"))?;

    let stdout = child.stdout.take().ok_or("agent stdout was not captured")?;
    let stderr = child.stderr.take().ok_or("agent stderr was not captured")?;

    let (text, errors) = tokio::try_join!(
        tee(stdout, tokio::io::stdout(), echo),
        tee(stderr, tokio::io::stderr(), echo),
    )?;

    let status = child.wait().await?;
    debug!(agent = %name, %status, bytes = text.len(), "agent finished");
    if !status.success() {
        return Err(format!(
            "command '{name}' finished with error: {status}\nStderr: {}",
            errors.trim()
        )
        .into());
    }
    Ok(AgentResponse { text })
}

impl AgentRunner for LiveAgentRunner {
    fn run(&self, request: &AgentRequest) -> AgentFuture<'_> {
        info!(agent = %self.program, model = ?request.model, "starting agent");
        Box::pin(spawn_agent(
            resolve_program(&self.program),
            self.program.clone(),
            self.args(request),
            self.stream,
        ))
    }
}
