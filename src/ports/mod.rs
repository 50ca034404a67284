//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the workflow core and an
//! external system (AI agent, shell, git, clock, terminal, filesystem).
//! Implementations live in `src/adapters/`.

pub mod agent;
pub mod clock;
pub mod filesystem;
pub mod git;
pub mod prompter;
pub mod shell;

pub use agent::{AgentFuture, AgentRequest, AgentResponse, AgentRunner};
pub use clock::Clock;
pub use filesystem::FileSystem;
pub use git::GitRepo;
pub use prompter::Prompter;
pub use shell::{ShellExecutor, ShellOutput};
