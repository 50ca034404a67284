//! The task workspace: at most one active task directory under the work root.
//!
//! ```text
//! docs/todos/work/2025-03-01-09-30-00-add-login-page/task.md   (active)
//! docs/todos/done/2025-02-27-14-02-11-fix-typo.md              (archived)
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::PathsConfig;
use crate::error::{PdtError, Result};
use crate::ports::FileSystem;

/// File inside a task directory holding the task description.
pub const TASK_FILE: &str = "task.md";
/// File inside a task directory holding the refined plan.
pub const PLAN_FILE: &str = "plan.md";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Finds, creates and archives task directories.
pub struct TaskWorkspace<'a> {
    fs: &'a dyn FileSystem,
    paths: &'a PathsConfig,
}

impl<'a> TaskWorkspace<'a> {
    /// Creates a workspace over the configured paths.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, paths: &'a PathsConfig) -> Self {
        Self { fs, paths }
    }

    /// Returns the single active task directory.
    ///
    /// Plain files in the work root are ignored. A missing work root counts as
    /// having no task.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::NoActiveTask`] when there is none,
    /// [`PdtError::AmbiguousTask`] when there are several, and
    /// [`PdtError::Port`] when the work root cannot be listed.
    pub fn active_task(&self) -> Result<PathBuf> {
        let work_dir = &self.paths.work_dir;
        if !self.fs.is_dir(work_dir) {
            return Err(PdtError::NoActiveTask { work_dir: work_dir.clone() });
        }

        let candidates: Vec<String> = self
            .fs
            .list_dir(work_dir)
            .map_err(|e| PdtError::port(format!("error reading {}", work_dir.display()), e))?
            .into_iter()
            .filter(|name| self.fs.is_dir(&work_dir.join(name)))
            .collect();
        debug!(work_dir = %work_dir.display(), ?candidates, "task directories");

        match candidates.as_slice() {
            [] => Err(PdtError::NoActiveTask { work_dir: work_dir.clone() }),
            [only] => Ok(work_dir.join(only)),
            _ => Err(PdtError::AmbiguousTask { work_dir: work_dir.clone(), candidates }),
        }
    }

    /// Creates the docs, work and done directories if missing.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Port`] if a directory cannot be created.
    pub fn ensure_layout(&self) -> Result<()> {
        for dir in [&self.paths.docs_dir, &self.paths.work_dir, &self.paths.done_dir] {
            self.fs
                .create_dir_all(dir)
                .map_err(|e| PdtError::port(format!("error creating {}", dir.display()), e))?;
        }
        Ok(())
    }

    /// Starts a task: creates `<work>/<timestamp>-<slug>/task.md`.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::TaskAlreadyActive`] if a task directory already
    /// exists, [`PdtError::AmbiguousTask`] if several do, or [`PdtError::Port`]
    /// if the files cannot be written.
    pub fn start_task(&self, title: &str, now: DateTime<Utc>) -> Result<PathBuf> {
        match self.active_task() {
            Ok(path) => return Err(PdtError::TaskAlreadyActive { path }),
            Err(PdtError::NoActiveTask { .. }) => {}
            Err(other) => return Err(other),
        }

        let dir_name = format!("{}-{}", now.format(TIMESTAMP_FORMAT), slugify(title, None));
        let task_dir = self.paths.work_dir.join(dir_name);
        let task_file = task_dir.join(TASK_FILE);
        self.fs
            .write(&task_file, &format!("# Task: {title}\n"))
            .map_err(|e| PdtError::port(format!("error writing {}", task_file.display()), e))?;
        info!(task = %task_dir.display(), "started task");
        Ok(task_dir)
    }

    /// Moves `task.md` into the done directory as `<task-dir-name>.md` and
    /// removes the task directory.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::Port`] if the move or the removal fails.
    pub fn archive(&self, task_dir: &Path) -> Result<PathBuf> {
        let name = task_dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PdtError::Usage(format!("invalid task directory {}", task_dir.display())))?;
        let archived = self.paths.done_dir.join(format!("{name}.md"));

        self.fs
            .create_dir_all(&self.paths.done_dir)
            .map_err(|e| PdtError::port(format!("error creating {}", self.paths.done_dir.display()), e))?;
        self.fs
            .rename(&task_dir.join(TASK_FILE), &archived)
            .map_err(|e| PdtError::port(format!("error moving {TASK_FILE} to {}", archived.display()), e))?;
        self.fs
            .remove_dir_all(task_dir)
            .map_err(|e| PdtError::port(format!("error removing {}", task_dir.display()), e))?;
        info!(archived = %archived.display(), "archived task");
        Ok(archived)
    }
}

/// Lowercases `text` and joins its alphanumeric runs with `-`, optionally
/// truncated to `max_len` characters.
#[must_use]
pub fn slugify(text: &str, max_len: Option<usize>) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if let Some(max) = max_len {
        slug = slug.chars().take(max).collect();
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() { "task".to_string() } else { slug.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use chrono::TimeZone;

    fn scratch(name: &str) -> (PathBuf, PathsConfig) {
        let root = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        let paths = PathsConfig {
            docs_dir: root.join("docs"),
            work_dir: root.join("docs/todos/work"),
            done_dir: root.join("docs/todos/done"),
            ..PathsConfig::default()
        };
        (root, paths)
    }

    #[test]
    fn no_task_directory_is_empty_state() {
        let (root, paths) = scratch("pdt_ws_empty");
        let ws = TaskWorkspace::new(&LiveFileSystem, &paths);

        assert!(matches!(ws.active_task(), Err(PdtError::NoActiveTask { .. })));
        ws.ensure_layout().unwrap();
        std::fs::write(paths.work_dir.join("notes.txt"), "not a task").unwrap();
        assert!(matches!(ws.active_task(), Err(PdtError::NoActiveTask { .. })));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn single_task_directory_is_active() {
        let (root, paths) = scratch("pdt_ws_single");
        std::fs::create_dir_all(paths.work_dir.join("2025-01-01-00-00-00-a")).unwrap();
        let ws = TaskWorkspace::new(&LiveFileSystem, &paths);

        assert_eq!(ws.active_task().unwrap(), paths.work_dir.join("2025-01-01-00-00-00-a"));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn several_task_directories_are_ambiguous() {
        let (root, paths) = scratch("pdt_ws_many");
        std::fs::create_dir_all(paths.work_dir.join("a")).unwrap();
        std::fs::create_dir_all(paths.work_dir.join("b")).unwrap();
        let ws = TaskWorkspace::new(&LiveFileSystem, &paths);

        match ws.active_task() {
            Err(PdtError::AmbiguousTask { candidates, .. }) => assert_eq!(candidates, vec!["a", "b"]),
            other => panic!("expected ambiguity, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn start_task_writes_task_file() {
        let (root, paths) = scratch("pdt_ws_start");
        let ws = TaskWorkspace::new(&LiveFileSystem, &paths);
        ws.ensure_layout().unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();

        let dir = ws.start_task("Add login page", now).unwrap();
        assert_eq!(dir, paths.work_dir.join("2025-03-01-09-30-00-add-login-page"));
        assert_eq!(std::fs::read_to_string(dir.join(TASK_FILE)).unwrap(), "# Task: Add login page\n");

        let err = ws.start_task("Another", now).unwrap_err();
        assert!(matches!(err, PdtError::TaskAlreadyActive { .. }));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn archive_moves_task_file_and_removes_dir() {
        let (root, paths) = scratch("pdt_ws_archive");
        let ws = TaskWorkspace::new(&LiveFileSystem, &paths);
        ws.ensure_layout().unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let dir = ws.start_task("Fix typo", now).unwrap();
        std::fs::write(dir.join(PLAN_FILE), "plan").unwrap();

        let archived = ws.archive(&dir).unwrap();
        assert_eq!(archived, paths.done_dir.join("2025-03-01-09-30-00-fix-typo.md"));
        assert!(archived.is_file());
        assert!(!dir.exists());
        assert!(matches!(ws.active_task(), Err(PdtError::NoActiveTask { .. })));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Add login page", None), "add-login-page");
        assert_eq!(slugify("  Fix: a/b  (urgent)! ", None), "fix-a-b-urgent");
        assert_eq!(slugify("???", None), "task");
        assert_eq!(slugify("a very long title that goes on", Some(10)), "a-very-lon");
        assert_eq!(slugify("abc def", Some(4)), "abc");
    }
}
