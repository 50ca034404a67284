//! Interactive terminal prompts.

use crate::error::PortError;

/// Asks the user questions.
pub trait Prompter: Send + Sync {
    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn confirm(&self, message: &str) -> Result<bool, PortError>;

    /// Asks the user to pick one of `options`; returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or `options` is empty.
    fn select(&self, message: &str, options: &[String]) -> Result<usize, PortError>;

    /// Asks for a line of free text.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn input(&self, message: &str) -> Result<String, PortError>;
}
