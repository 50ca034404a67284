//! File operations declared in a feature specification.
//!
//! A spec lists each change under its own level-3 heading:
//!
//! ```text
//! ### 1. Add the parser
//! CREATE: `src/parser.rs`
//! Implements the line scanner.
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

const SECTION_DELIMITER: &str = "\n### ";

/// Whether an operation introduces a file or changes an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    /// A new file.
    Create,
    /// An existing file.
    Modify,
}

impl OperationKind {
    const ALL: [Self; 2] = [Self::Create, Self::Modify];

    /// The keyword used in spec documents.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Modify => "MODIFY",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.keyword())
    }
}

/// One file-level change parsed from a spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOperation {
    /// Create or modify.
    pub kind: OperationKind,
    /// Target path, trimmed and non-empty.
    pub file_path: String,
    /// Free-form description, trimmed.
    pub description: String,
}

/// Parses every `CREATE`/`MODIFY` operation out of a spec document.
///
/// Sections that do not follow the grammar are skipped.
#[must_use]
pub fn parse_spec_operations(spec: &str) -> Vec<FileOperation> {
    let operations: Vec<FileOperation> = spec
        .split(SECTION_DELIMITER)
        .filter(|chunk| !chunk.trim().is_empty())
        .filter_map(parse_section)
        .collect();
    debug!(count = operations.len(), "parsed spec operations");
    operations
}

/// Finds the leftmost position in `section` where an operation parses.
fn parse_section(section: &str) -> Option<FileOperation> {
    let mut candidates: Vec<(usize, OperationKind)> = OperationKind::ALL
        .iter()
        .flat_map(|kind| section.match_indices(kind.keyword()).map(|(at, _)| (at, *kind)))
        .collect();
    candidates.sort_by_key(|(at, _)| *at);

    candidates.into_iter().find_map(|(at, kind)| parse_operation_at(&section[at..], kind))
}

/// Parses `<KEYWORD>: `<path>`\n<description>` at the start of `text`.
fn parse_operation_at(text: &str, kind: OperationKind) -> Option<FileOperation> {
    let rest = text.strip_prefix(kind.keyword())?.strip_prefix(": `")?;
    let close = rest.find('`')?;
    if close == 0 {
        return None;
    }
    let description = rest[close + 1..].strip_prefix('\n')?;
    let file_path = rest[..close].trim();
    if file_path.is_empty() {
        return None;
    }
    Some(FileOperation {
        kind,
        file_path: file_path.to_string(),
        description: description.trim().to_string(),
    })
}
