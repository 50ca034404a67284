//! Integration tests driving the `pdt` binary.
//!
//! Each test runs in its own scratch project; ports other than the filesystem
//! are served from a cassette via `PDT_REPLAY`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};

struct Project {
    root: PathBuf,
}

impl Project {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("pdt_cli_{name}"));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root.join(relative)).unwrap()
    }

    /// Writes a cassette of `(port, method, output)` entries.
    fn cassette(&self, entries: &[(&str, &str, Value)]) -> PathBuf {
        let interactions: Vec<Value> = entries
            .iter()
            .enumerate()
            .map(|(seq, (port, method, output))| {
                json!({"seq": seq, "port": port, "method": method, "input": {}, "output": output})
            })
            .collect();
        let cassette = json!({
            "name": "cli-test",
            "recorded_at": "2025-03-01T09:30:00Z",
            "commit": "unknown",
            "interactions": interactions,
        });
        let path = self.root.join("replay.cassette.yaml");
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
        path
    }

    fn run(&self, args: &[&str], cassette: Option<&Path>) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pdt"));
        cmd.args(args)
            .current_dir(&self.root)
            .env_remove("PDT_RECORD")
            .env_remove("PDT_REPLAY")
            .env_remove("PDT_AGENT")
            .env_remove("PDT_SHELL");
        if let Some(path) = cassette {
            cmd.env("PDT_REPLAY", path);
        }
        cmd.output().expect("failed to run pdt binary")
    }
}

impl Drop for Project {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const PROJECT: &str = "# Demo\n\n## Commands\n- build: `make all`\n- deploy: `./deploy.sh`\n\n\
                       ## Automated Validation\n- `make lint`\n- `make test`\n";

#[test]
fn help_lists_workflow_commands() {
    let project = Project::new("help");
    let output = project.run(&["--help"], None);
    let out = stdout(&output);
    assert!(output.status.success());
    for name in ["todo", "spec", "code", "test", "doc", "write", "build", "deploy", "validate", "commit"] {
        assert!(out.contains(name), "help is missing {name}");
    }
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let project = Project::new("invalid");
    let output = project.run(&["nonsense"], None);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unrecognized subcommand"));
}

#[test]
fn build_runs_declared_command() {
    let project = Project::new("build_ok");
    project.write("docs/project-description.md", PROJECT);
    let cassette = project.cassette(&[(
        "shell",
        "run",
        json!({"ok": {"exit_code": 0, "stdout": "compiled 3 files\n", "stderr": ""}}),
    )]);

    let output = project.run(&["build"], Some(&cassette));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("compiled 3 files"));
}

#[test]
fn missing_deploy_command_is_reported() {
    let project = Project::new("deploy_missing");
    project.write("docs/project-description.md", "# Demo\n\n## Commands\n- build: `make`\n");

    let output = project.run(&["deploy"], None);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("command 'deploy' not found"));
}

#[test]
fn validate_stops_at_first_failure() {
    let project = Project::new("validate_fail");
    project.write("docs/project-description.md", PROJECT);
    let cassette = project.cassette(&[(
        "shell",
        "run",
        json!({"ok": {"exit_code": 1, "stdout": "", "stderr": "lint: 2 problems\n"}}),
    )]);

    let output = project.run(&["validate"], Some(&cassette));
    let err = stderr(&output);
    assert!(!output.status.success());
    assert!(err.contains("`make lint` exited with status 1"), "stderr: {err}");
}

#[test]
fn refine_without_task_reports_empty_workspace() {
    let project = Project::new("refine_none");
    project.write("docs/project-description.md", PROJECT);

    let output = project.run(&["refine"], None);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no active task found"));
}

#[test]
fn commit_with_two_tasks_is_ambiguous() {
    let project = Project::new("commit_ambiguous");
    project.write("docs/todos/work/a/task.md", "# Task: a\n");
    project.write("docs/todos/work/b/task.md", "# Task: b\n");

    let output = project.run(&["commit", "--yes"], None);
    let err = stderr(&output);
    assert!(!output.status.success());
    assert!(err.contains("multiple active tasks"));
    assert!(err.contains("a, b"));
}

#[test]
fn write_saves_agent_content() {
    let project = Project::new("write_blog");
    let cassette = project.cassette(&[(
        "agent",
        "run",
        json!({"ok": {"text": "```markdown // blog/launch.md\n# Launch\n```\n"}}),
    )]);

    let output = project.run(&["write", "blog", "launch"], Some(&cassette));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(project.read("content/blog/launch.md"), "# Launch\n");
}

#[test]
fn todo_then_commit_moves_task_through_workflow() {
    let project = Project::new("todo_commit");
    project.write("docs/project-description.md", PROJECT);
    project.write("docs/todo.md", "# Todo\n\n- [ ] Add login page\n- [ ] Write docs\n");

    let todo = project.cassette(&[
        ("prompter", "select", json!({"ok": 0})),
        ("clock", "now", json!("2025-03-01T09:30:00Z")),
    ]);
    let output = project.run(&["todo"], Some(&todo));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(project.read("docs/todo.md"), "# Todo\n\n- [ ] Write docs\n");

    let commit = project.cassette(&[
        ("git", "diff", json!({"ok": "+login"})),
        ("agent", "run", json!({"ok": {"text": "feat: add login page\n"}})),
        ("git", "add_all", json!({"ok": null})),
        ("git", "commit", json!({"ok": null})),
    ]);
    let output = project.run(&["commit", "-y"], Some(&commit));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("feat: add login page"));
    assert_eq!(
        project.read("docs/todos/done/2025-03-01-09-30-00-add-login-page.md"),
        "# Task: Add login page\n"
    );
}
