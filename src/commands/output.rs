//! Writing agent-generated code blocks to disk.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PdtError, Result};
use crate::markdown::{extract_code_blocks, CodeBlock};
use crate::ports::FileSystem;
use crate::ui;

/// What happened to the code blocks of one agent response.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Files written, in document order.
    pub written: Vec<PathBuf>,
    /// Blocks skipped because they had no usable path.
    pub skipped: usize,
}

/// Extracts the code blocks in `markdown` and writes each annotated block
/// below `base`.
///
/// Blocks without a path, and paths that are absolute or climb out of `base`,
/// are skipped with a warning.
///
/// # Errors
///
/// Returns [`PdtError::Port`] on the first write that fails.
pub fn write_code_blocks(fs: &dyn FileSystem, base: &Path, markdown: &str) -> Result<WriteReport> {
    let mut report = WriteReport::default();
    for block in extract_code_blocks(markdown) {
        let Some(target) = target_path(base, &block) else {
            report.skipped += 1;
            continue;
        };
        fs.write(&target, &block.content)
            .map_err(|e| PdtError::port(format!("error writing {}", target.display()), e))?;
        debug!(path = %target.display(), bytes = block.content.len(), "wrote code block");
        ui::success(format!("Wrote {}", target.display()));
        report.written.push(target);
    }
    Ok(report)
}

fn target_path(base: &Path, block: &CodeBlock) -> Option<PathBuf> {
    let Some(relative) = block.file_path.as_deref() else {
        warn!(lines = block.content.lines().count(), "code block has no file path");
        ui::warn(format!("Skipping code block with no file path:\n{}", block.content.trim_end()));
        return None;
    };
    if !is_contained(Path::new(relative)) {
        warn!(path = relative, "code block path escapes the output directory");
        ui::warn(format!("Skipping code block for {relative}: path must stay inside {}", base.display()));
        return None;
    }
    Some(base.join(relative))
}

/// Relative paths made only of normal components (and `.`).
fn is_contained(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().any(|c| matches!(c, Component::Normal(_)))
}
