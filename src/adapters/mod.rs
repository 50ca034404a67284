//! Port implementations.
//!
//! `live` talks to the real world; `recording` wraps live adapters and writes
//! every call into a cassette; `replaying` serves calls back from one.

pub mod live;
pub mod recording;
pub mod replaying;
