//! Configuration module for progress-sink
//!
//! Configuration hierarchy:
//! 1. Environment variables (PROGRESS_SINK_*, highest priority)
//! 2. TOML config file
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    with_overrides_from, ConfigWarning, ENV_LINE_ENDING, ENV_MAX_CAUSE_DEPTH, ENV_SANITIZER,
};
pub use types::{ExceptionConfig, LineEnding, OutputConfig, SanitizerKind, SinkConfig};
