//! Live git adapter using `git` CLI commands.

use std::process::Command;

use crate::error::PortError;
use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` CLI in the current directory.
pub struct LiveGitRepo;

fn git(args: &[&str]) -> Result<String, PortError> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl GitRepo for LiveGitRepo {
    fn diff(&self) -> Result<String, PortError> {
        git(&["diff"])
    }

    fn add_all(&self) -> Result<(), PortError> {
        git(&["add", "."]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<(), PortError> {
        git(&["commit", "-m", message]).map(|_| ())
    }
}
