//! Prompt builders for every agent call.
//!
//! Builders take document contents, not paths; commands do the reading.

use std::fmt::Write as _;
use std::path::Path;

use walkdir::WalkDir;

use crate::response::ClarifyingQuestion;

/// Asks for a draft spec plus clarifying questions as a JSON object.
#[must_use]
pub fn planner(goal: &str, file_listing: &str) -> String {
    format!(
        r#"You are an expert software engineering assistant.
Turn the user's high-level request into a detailed technical specification.

User request:
"{goal}"

Project files:
{file_listing}
Do two things:
1. Draft a technical specification in markdown: the approach, new files and changes to existing ones.
   List each file change under its own `### ` heading as `CREATE: `path`` or `MODIFY: `path`` followed by a description.
2. Ask clarifying questions about anything ambiguous.

Respond with a single JSON object and nothing else:
{{
  "draftSpec": "<markdown>",
  "clarifyingQuestions": [
    {{ "questionId": "<unique id>", "question": "<question>" }}
  ]
}}
"#
    )
}

/// Asks for the draft spec to be revised using the user's answers.
#[must_use]
pub fn refine_spec(goal: &str, draft_spec: &str, answered: &[ClarifyingQuestion]) -> String {
    let mut answers = String::new();
    for q in answered {
        let _ = write!(answers, "Q: {}\nA: {}\n\n", q.question, q.answer);
    }
    format!(
        r#"You are an expert software engineering assistant.
You drafted a specification and asked clarifying questions; the user has answered them.

Original goal: "{goal}"

Draft specification:
{draft_spec}

Answers:
{answers}Update the specification to reflect these answers.
Reply with only the refined markdown specification. Record any open questions as comments inside it.
"#
    )
}

/// Asks for a task to be expanded into an actionable plan.
#[must_use]
pub fn refine_task(project_description: &str, task: &str) -> String {
    format!(
        "Project description:\n{project_description}\n\n\
         Task:\n{task}\n\n\
         Refine the task into a detailed, actionable technical plan in markdown. \
         Name the files to change, the automated tests to add and the manual checks a user should run.\n"
    )
}

/// Asks the agent to describe the repository it is run in.
#[must_use]
pub fn project_description() -> &'static str {
    "Analyze the codebase in the current directory and write a project description in markdown. \
     Cover the project structure, main functionality and anything an AI assistant needs to work on it.\n\
     Include a `## Commands` section listing commands as `- <name>: `<shell command>`` \
     (at least `build` and `deploy` when they exist), and a `## Automated Validation` section \
     listing checks as `- `<shell command>``.\n\
     Reply with only the markdown document.\n"
}

/// Asks for the active task to be implemented as annotated code blocks.
#[must_use]
pub fn master_implementation(project_description: &str, task: &str, plan: Option<&str>) -> String {
    let mut prompt = format!(
        "Project description:\n{project_description}\n\nTask:\n{task}\n\n"
    );
    if let Some(plan) = plan {
        let _ = write!(prompt, "Technical plan:\n{plan}\n\n");
    }
    prompt.push_str(
        "Implement the task following the project description and the plan. \
         Place code in the files the plan names and include the required tests.\n\
         Return every file as a fenced code block whose opening fence names the path, \
         for example ```rust // src/lib.rs\n",
    );
    prompt
}

/// Asks for a conventional-commits message describing the task.
#[must_use]
pub fn commit_message(task: &str) -> String {
    format!(
        "Write a concise, descriptive git commit message for the work described below. \
         Say what changed and why, following conventional commits (e.g. `feat: add login page`). \
         Reply with only the message.\n\nTask:\n{task}\n"
    )
}

/// Asks for tests covering a spec.
#[must_use]
pub fn test_generation(spec: &str) -> String {
    format!(
        "Write comprehensive tests for the specification below, covering unit, integration and \
         end-to-end behavior where it applies. Follow the project's existing test layout and frameworks.\n\
         Return every test file as a fenced code block whose opening fence names the path, \
         for example ```go // pkg/parser/parser_test.go\n\n\
         Specification:\n{spec}\n"
    )
}

/// Asks for internal documentation of a spec and the code implementing it.
///
/// `code` pairs each file path with its contents.
#[must_use]
pub fn doc_generation(spec: &str, code: &[(String, String)]) -> String {
    let files: Vec<String> =
        code.iter().map(|(path, content)| format!("File: {path}\n```\n{content}\n```")).collect();
    format!(
        "Update the internal documentation for the feature below. Explain how it works, \
         its API and how to use it.\n\
         Return every documentation file as a fenced code block whose opening fence names a path \
         relative to the handbook, for example ```markdown // parser.md\n\n\
         Specification:\n{spec}\n\nImplemented code:\n{}\n",
        files.join("\n\n")
    )
}

/// Asks for external-facing content of a given kind.
#[must_use]
pub fn content_generation(kind: &str, topic: &str) -> String {
    format!(
        "Write {kind} content about: {topic}.\n\
         It should be ready to publish as is. Return it as a fenced code block whose opening fence \
         names a file path relative to the content directory, for example ```markdown // blog/launch.md\n"
    )
}

/// Hands a whole spec to an agent that writes files itself.
#[must_use]
pub fn implement_spec(spec: &str) -> String {
    format!(
        "You are an autonomous programming agent with write access to the local filesystem.\n\
         Implement the feature described in the specification below.\n\n\
         ## Specification\n{spec}\n\n\
         ## Action\n\
         1. Read the whole specification.\n\
         2. Work out every file to create, modify or delete.\n\
         3. Split the work into small tasks.\n\
         4. For each task write the complete final contents of every affected file, creating \
         directories as needed and overwriting existing files.\n\n\
         ## Response\n\
         When all files are written, reply with a short summary of what you did \
         (e.g. \"Created foo.go, modified bar.go\"). Do not repeat the code.\n"
    )
}

/// Lists every file under `root`, one relative path per line, skipping
/// directories whose name is in `ignore`.
#[must_use]
pub fn project_file_listing(root: &Path, ignore: &[String]) -> String {
    let mut listing = String::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !(entry.file_type().is_dir()
                && ignore.iter().any(|name| entry.file_name().to_str() == Some(name.as_str())))
    });
    for entry in walker.filter_map(std::result::Result::ok) {
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path().strip_prefix(root).unwrap_or(entry.path());
        listing.push_str(&path.display().to_string());
        listing.push('\n');
    }
    listing
}
