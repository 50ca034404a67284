//! Cassettes: recorded port interactions used to replay a workflow
//! deterministically.
//!
//! Set `PDT_RECORD=<file>` to capture a live run, and `PDT_REPLAY=<file>` to
//! serve the captured agent, shell, git, clock and prompter answers back.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
