//! Live adapters for real external interactions.

pub mod agent;
pub mod clock;
pub mod filesystem;
pub mod git;
pub mod prompter;
pub mod shell;

pub use agent::LiveAgentRunner;
pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
pub use git::LiveGitRepo;
pub use prompter::LivePrompter;
pub use shell::LiveShellExecutor;
