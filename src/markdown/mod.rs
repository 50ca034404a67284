//! Line-oriented markdown readers.
//!
//! Everything here is a pure function of its input text; callers own the I/O.

pub mod code_blocks;
pub mod project;
pub mod spec_ops;
pub mod todo;

pub use code_blocks::{extract_code_blocks, CodeBlock};
pub use project::{find_project_command, validation_commands, ProjectDescription};
pub use spec_ops::{parse_spec_operations, FileOperation, OperationKind};
pub use todo::{parse_todo, render_todo};
