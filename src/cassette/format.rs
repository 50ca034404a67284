//! Cassette data structures.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PdtError, Result};

/// A single recorded call through a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`agent`, `shell`, `git`, `clock`, `prompter`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments passed to the port.
    pub input: serde_json::Value,
    /// Value returned; fallible methods use `{"ok": ...}` / `{"err": "..."}`.
    pub output: serde_json::Value,
}

/// An ordered recording of one `pdt` invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name, usually the command that was recorded.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit of the project at recording time.
    pub commit: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a YAML cassette from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Io`] if the file cannot be read and
    /// [`PdtError::Usage`] if it is not a cassette.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PdtError::io(format!("failed to read cassette {}", path.display()), e))?;
        serde_yaml::from_str(&content).map_err(|e| {
            PdtError::Usage(format!("failed to parse cassette {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_reads_written_cassette() {
        let dir = std::env::temp_dir().join("pdt_cassette_format_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("todo.cassette.yaml");

        let cassette = Cassette {
            name: "pdt todo".into(),
            recorded_at: Utc::now(),
            commit: "abc123".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "prompter".into(),
                method: "select".into(),
                input: json!({"message": "Choose a task", "options": ["a", "b"]}),
                output: json!({"ok": 1}),
            }],
        };
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        assert_eq!(Cassette::load(&path).unwrap(), cassette);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_non_cassette_yaml() {
        let dir = std::env::temp_dir().join("pdt_cassette_format_bad");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        std::fs::write(&path, "just: a map\n").unwrap();

        let err = Cassette::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse cassette"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
