//! Status sink module
//!
//! `StatusSink` captures a session's status lines in memory, split into a
//! full record plus error-only and warning-only views, alongside the last
//! reported progress percentage.

mod sink;
mod snapshot;

pub use sink::{ExceptionHook, StatusSink};
pub use snapshot::StatusSnapshot;
