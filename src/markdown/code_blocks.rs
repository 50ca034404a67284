//! Fenced code block extraction.
//!
//! Agent responses carry generated files as fenced blocks whose opening fence
//! names the target path in a comment annotation:
//!
//! ````text
//! ```rust // src/lib.rs
//! pub fn hello() {}
//! ```
//! ````

use tracing::debug;

const FENCE: &str = "```";
const PATH_MARKER: &str = "//";

/// A fenced block lifted out of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Path from the `// path` annotation on the opening fence, if any.
    pub file_path: Option<String>,
    /// Text between the fences, every line newline-terminated.
    pub content: String,
}

#[derive(Debug)]
enum FenceState {
    Outside,
    Inside { file_path: Option<String>, content: String },
}

/// Extracts every closed fenced block from `markdown`, in document order.
///
/// A block left open at end of input is dropped. Fences do not nest.
#[must_use]
pub fn extract_code_blocks(markdown: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut state = FenceState::Outside;

    for line in markdown.lines() {
        state = match state {
            FenceState::Outside if line.starts_with(FENCE) => {
                FenceState::Inside { file_path: fence_annotation(line), content: String::new() }
            }
            FenceState::Outside => FenceState::Outside,
            FenceState::Inside { file_path, content } if line.starts_with(FENCE) => {
                blocks.push(CodeBlock { file_path, content });
                FenceState::Outside
            }
            FenceState::Inside { file_path, mut content } => {
                content.push_str(line);
                content.push('\n');
                FenceState::Inside { file_path, content }
            }
        };
    }

    if let FenceState::Inside { file_path, .. } = state {
        debug!(?file_path, "dropping unterminated code block");
    }
    debug!(count = blocks.len(), "extracted code blocks");
    blocks
}

/// Reads the path annotation from an opening fence line.
///
/// Only a second whitespace-separated token starting with `//` counts; the
/// path is everything after the marker, trimmed.
fn fence_annotation(line: &str) -> Option<String> {
    let line = line.trim_start();
    let first_break = line.find(char::is_whitespace)?;
    let rest = line[first_break..].trim_start();
    let path = rest.strip_prefix(PATH_MARKER)?.trim();
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotated_block_carries_path() {
        let blocks = extract_code_blocks("```go // main.go\npackage main\n```");
        assert_eq!(
            blocks,
            vec![CodeBlock {
                file_path: Some("main.go".into()),
                content: "package main\n".into()
            }]
        );
    }

    #[test]
    fn language_only_fence_has_no_path() {
        let blocks = extract_code_blocks("```js\nconsole.log(1)\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].file_path, None);
        assert_eq!(blocks[0].content, "console.log(1)\n");
    }

    #[test]
    fn marker_glued_to_path_is_accepted() {
        let blocks = extract_code_blocks("```rust //src/lib.rs\nfn a() {}\n```\n");
        assert_eq!(blocks[0].file_path.as_deref(), Some("src/lib.rs"));
    }

    #[test]
    fn path_without_comment_marker_is_ignored() {
        let blocks = extract_code_blocks("```go main.go\nx\n```");
        assert_eq!(blocks[0].file_path, None);
    }

    #[test]
    fn marker_in_first_token_is_ignored() {
        let blocks = extract_code_blocks("```// main.go\nx\n```");
        assert_eq!(blocks[0].file_path, None);
    }

    #[test]
    fn empty_annotation_is_no_path() {
        let blocks = extract_code_blocks("```go //   \nx\n```");
        assert_eq!(blocks[0].file_path, None);
    }

    #[test]
    fn blocks_come_out_in_document_order() {
        let doc = "intro\n```md // a.md\n# A\n\nbody\n```\ntext between\n```\nplain\n```\n```py // b.py\nprint(1)\n```\n";
        let blocks = extract_code_blocks(doc);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].file_path.as_deref(), Some("a.md"));
        assert_eq!(blocks[0].content, "# A\n\nbody\n");
        assert_eq!(blocks[1].file_path, None);
        assert_eq!(blocks[1].content, "plain\n");
        assert_eq!(blocks[2].file_path.as_deref(), Some("b.py"));
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let blocks = extract_code_blocks("```go // a.go\nx\n```\n```go // b.go\ny\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].file_path.as_deref(), Some("a.go"));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract_code_blocks("").is_empty());
        assert!(extract_code_blocks("no fences here\n").is_empty());
    }

    #[test]
    fn empty_block_has_empty_content() {
        let blocks = extract_code_blocks("```\n```");
        assert_eq!(blocks, vec![CodeBlock { file_path: None, content: String::new() }]);
    }

    #[test]
    fn crlf_lines_are_normalised() {
        let blocks = extract_code_blocks("```go // a.go\r\nx\r\n```\r\n");
        assert_eq!(blocks[0].file_path.as_deref(), Some("a.go"));
        assert_eq!(blocks[0].content, "x\n");
    }

    #[test]
    fn extraction_is_repeatable() {
        let doc = "```go // a.go\nx\n```";
        assert_eq!(extract_code_blocks(doc), extract_code_blocks(doc));
    }
}
