//! Recording session shared by every recording adapter.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::warn;

use super::recorder::CassetteRecorder;
use crate::error::{PdtError, Result};

/// One cassette that every port records into, in call order.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Starts a session that will write to `path` when finished.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Usage`] if a cassette already exists at `path`.
    pub fn new(path: &Path, name: &str) -> Result<Self> {
        if path.exists() {
            return Err(PdtError::Usage(format!(
                "cassette already exists: {}",
                path.display()
            )));
        }
        let recorder = CassetteRecorder::new(path, name, commit_hash());
        Ok(Self { recorder: Arc::new(Mutex::new(recorder)) })
    }

    /// A handle for a recording adapter.
    #[must_use]
    pub fn recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(&self.recorder)
    }

    /// Writes the cassette to disk.
    ///
    /// Every adapter holding a handle must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Usage`] if handles are still alive and
    /// [`PdtError::Io`] if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| PdtError::Usage("recording adapters still hold the cassette".into()))?
            .into_inner()
            .map_err(|e| PdtError::Usage(format!("cassette recorder lock poisoned: {e}")))?;
        recorder.finish().map_err(|e| PdtError::io("failed to write cassette", e))
    }
}

/// The current git commit hash, or "unknown" outside a repository.
fn commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        warn!("could not read git commit hash, recording cassette as 'unknown'");
        "unknown".to_string()
    })
}
