//! The backlog file (`docs/todo.md`).

const UNCHECKED_PREFIX: &str = "- [ ] ";
const HEADER: &str = "# Todo\n\n";

/// Parses backlog entries, one per non-empty line.
///
/// Headings and `---` separators are skipped; an unchecked checkbox prefix is
/// removed.
#[must_use]
pub fn parse_todo(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("---"))
        .map(|line| line.strip_prefix(UNCHECKED_PREFIX).unwrap_or(line).to_string())
        .collect()
}

/// Renders entries back into the backlog format.
#[must_use]
pub fn render_todo(tasks: &[String]) -> String {
    let mut out = String::from(HEADER);
    for task in tasks {
        out.push_str(UNCHECKED_PREFIX);
        out.push_str(task);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_checkbox_entries() {
        let content = "# Todo\n\n- [ ] Task 1\n- [ ] Task 2\n  Subtask\n---\n- [x] Done already\n";
        assert_eq!(parse_todo(content), vec!["Task 1", "Task 2", "Subtask", "- [x] Done already"]);
    }

    #[test]
    fn empty_file_has_no_tasks() {
        assert!(parse_todo("").is_empty());
        assert!(parse_todo("# Todo\n\n").is_empty());
    }

    #[test]
    fn renders_header_and_entries() {
        let tasks = vec!["Task A".to_string(), "Task B".to_string()];
        assert_eq!(render_todo(&tasks), "# Todo\n\n- [ ] Task A\n- [ ] Task B\n");
        assert_eq!(render_todo(&[]), "# Todo\n\n");
    }

    #[test]
    fn render_then_parse_preserves_entries() {
        let tasks = vec!["Write docs".to_string(), "Ship it".to_string()];
        assert_eq!(parse_todo(&render_todo(&tasks)), tasks);
    }
}
