//! Workflow configuration: where documents live and how the agent is invoked.
//!
//! Defaults match the conventional layout:
//!
//! ```text
//! docs/
//!   project-description.md
//!   todo.md
//!   todos/work/<active task>/task.md
//!   todos/done/
//!   handbook/
//! .pdt/specs/
//! content/
//! ```
//!
//! An optional `.pdt/config.yaml` overrides any field; the `PDT_AGENT`,
//! `PDT_PLANNER_MODEL`, `PDT_CODER_MODEL` and `PDT_SHELL` environment
//! variables override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PdtError, Result};

/// Location of the optional config file, relative to the project root.
pub const CONFIG_FILE: &str = ".pdt/config.yaml";

/// Paths to workflow documents and output directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root documentation directory.
    pub docs_dir: PathBuf,
    /// Backlog of tasks not yet started.
    pub todo_file: PathBuf,
    /// Holds the single active task directory.
    pub work_dir: PathBuf,
    /// Archive of finished task files.
    pub done_dir: PathBuf,
    /// Project description with `## Commands` and `## Automated Validation`.
    pub project_description: PathBuf,
    /// Where `pdt spec` saves specifications.
    pub specs_dir: PathBuf,
    /// Spec used by `pdt code` when none is given.
    pub default_spec: PathBuf,
    /// Output directory for `pdt write`.
    pub content_dir: PathBuf,
    /// Output directory for `pdt doc`.
    pub handbook_dir: PathBuf,
    /// Directory names left out of the project file listing.
    pub context_ignore: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            todo_file: PathBuf::from("docs/todo.md"),
            work_dir: PathBuf::from("docs/todos/work"),
            done_dir: PathBuf::from("docs/todos/done"),
            project_description: PathBuf::from("docs/project-description.md"),
            specs_dir: PathBuf::from(".pdt/specs"),
            default_spec: PathBuf::from(".pdt/specs/spec.md"),
            content_dir: PathBuf::from("content"),
            handbook_dir: PathBuf::from("docs/handbook"),
            context_ignore: vec![".git".into(), "pdt-dist".into(), "target".into()],
        }
    }
}

/// How the external agent CLI is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Agent executable name or path.
    pub program: String,
    /// Flag preceding the model name.
    pub model_flag: String,
    /// Flag preceding the prompt; empty passes the prompt positionally.
    pub prompt_flag: String,
    /// Model for spec drafting.
    pub planner_model: Option<String>,
    /// Model for implementing specs.
    pub coder_model: Option<String>,
    /// Echo agent output to the terminal while it runs.
    pub stream: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            program: "gemini".into(),
            model_flag: "-m".into(),
            prompt_flag: "-p".into(),
            planner_model: Some("gemini-2.5-flash".into()),
            coder_model: Some("gemini-2.5-pro".into()),
            stream: true,
        }
    }
}

/// Complete workflow configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Document and output locations.
    pub paths: PathsConfig,
    /// Agent invocation.
    pub agent: AgentConfig,
    /// Shell used for project commands.
    pub shell: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self { paths: PathsConfig::default(), agent: AgentConfig::default(), shell: "bash".into() }
    }
}

impl WorkflowConfig {
    /// Loads `<root>/.pdt/config.yaml` if present, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Io`] if the file exists but cannot be read, or
    /// [`PdtError::Config`] if it is not valid YAML for this schema.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let mut config = if path.is_file() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| PdtError::io(format!("error reading {}", path.display()), e))?;
            Self::from_yaml(&path, &raw)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        debug!(?config, "loaded workflow config");
        Ok(config)
    }

    /// Parses configuration from YAML text; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Config`] on malformed YAML.
    pub fn from_yaml(path: &Path, raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
            .map_err(|source| PdtError::Config { path: path.to_path_buf(), source })
    }

    /// Applies overrides from a variable lookup (the process environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(program) = non_empty("PDT_AGENT") {
            self.agent.program = program;
        }
        if let Some(model) = non_empty("PDT_PLANNER_MODEL") {
            self.agent.planner_model = Some(model);
        }
        if let Some(model) = non_empty("PDT_CODER_MODEL") {
            self.agent.coder_model = Some(model);
        }
        if let Some(shell) = non_empty("PDT_SHELL") {
            self.shell = shell;
        }
    }

    /// Re-bases every relative path onto `root`.
    #[must_use]
    pub fn rooted_at(mut self, root: &Path) -> Self {
        let paths = &mut self.paths;
        for path in [
            &mut paths.docs_dir,
            &mut paths.todo_file,
            &mut paths.work_dir,
            &mut paths.done_dir,
            &mut paths.project_description,
            &mut paths.specs_dir,
            &mut paths.default_spec,
            &mut paths.content_dir,
            &mut paths.handbook_dir,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}
