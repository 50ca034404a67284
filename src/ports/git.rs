//! Git repository port.

use crate::error::PortError;

/// The git operations used while finalizing a task.
pub trait GitRepo: Send + Sync {
    /// Returns the unstaged diff of the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error if `git diff` fails.
    fn diff(&self) -> Result<String, PortError>;

    /// Stages every change in the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error if `git add` fails.
    fn add_all(&self) -> Result<(), PortError>;

    /// Creates a commit with the given message.
    ///
    /// # Errors
    ///
    /// Returns an error if `git commit` fails (nothing staged, hooks, etc.).
    fn commit(&self, message: &str) -> Result<(), PortError>;
}
