//! Progress Reporter Implementations
//!
//! Concrete implementations of ProgressReporter besides the in-memory sink:
//! - JsonLinesReporter: NDJSON output for log files and CI
//! - TracingReporter: forwards to the host's tracing subscriber

mod json;
mod logging;

pub use json::JsonLinesReporter;
pub use logging::TracingReporter;
