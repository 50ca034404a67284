//! Build, deploy and validation commands declared in the project description.
//!
//! The project description is a markdown document maintained alongside the
//! code. Two sections are machine-read:
//!
//! ```text
//! ## Commands
//! - build: `cargo build`
//! - deploy: `./scripts/deploy.sh`
//!
//! ## Automated Validation
//! - `cargo test`
//! - `cargo clippy`
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PdtError, Result};
use crate::ports::FileSystem;

const COMMANDS_HEADING: &str = "## Commands";
const VALIDATION_HEADING: &str = "## Automated Validation";
const SECTION_PREFIX: &str = "## ";

/// Looks up the command registered as `name` under `## Commands`.
///
/// Returns `None` when the name or the section is missing. Only the first
/// `## Commands` section is searched.
#[must_use]
pub fn find_project_command(document: &str, name: &str) -> Option<String> {
    let entry_prefix = format!("- {name}: `");
    let mut in_section = false;

    for line in document.lines().map(str::trim) {
        if !in_section {
            in_section = line == COMMANDS_HEADING;
            continue;
        }
        if let Some(rest) = line.strip_prefix(&entry_prefix) {
            return rest.split('`').next().map(str::to_string);
        }
        if line.starts_with(SECTION_PREFIX) {
            break;
        }
    }
    None
}

/// Lists the commands under `## Automated Validation`, in declaration order.
///
/// The list ends at the next level-2 heading or at the first blank line that
/// follows at least one command.
#[must_use]
pub fn validation_commands(document: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut in_section = false;

    for line in document.lines().map(str::trim) {
        if !in_section {
            in_section = line == VALIDATION_HEADING;
            continue;
        }
        if let Some(command) = validation_entry(line) {
            commands.push(command.to_string());
        } else if line.starts_with(SECTION_PREFIX) || (line.is_empty() && !commands.is_empty()) {
            break;
        }
    }
    commands
}

fn validation_entry(line: &str) -> Option<&str> {
    line.strip_prefix("- `")?.strip_suffix('`')
}

/// The project description document, loaded once per command.
#[derive(Debug, Clone)]
pub struct ProjectDescription {
    path: PathBuf,
    content: String,
}

impl ProjectDescription {
    /// Reads the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Port`] when the file cannot be read.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let content = fs.read_to_string(path).map_err(|e| {
            PdtError::port(format!("error reading {}", path.display()), e)
        })?;
        debug!(path = %path.display(), "loaded project description");
        Ok(Self { path: path.to_path_buf(), content })
    }

    /// Wraps already-loaded content.
    #[must_use]
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }

    /// Raw markdown.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Looks up a named command.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::CommandNotFound`] if `name` is not declared.
    pub fn command(&self, name: &str) -> Result<String> {
        find_project_command(&self.content, name).ok_or_else(|| PdtError::CommandNotFound {
            name: name.to_string(),
            path: self.path.clone(),
        })
    }

    /// The ordered validation command list; empty when the section is absent.
    #[must_use]
    pub fn validation_commands(&self) -> Vec<String> {
        validation_commands(&self.content)
    }
}
