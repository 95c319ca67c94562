//! Serializable view of a sink for display layers

use serde::Serialize;

/// Point-in-time copy of everything a `StatusSink` has recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub output: String,
    pub errors: String,
    pub warnings: String,
    pub progress: i32,
    pub has_errors: bool,
    pub has_warnings: bool,
}
