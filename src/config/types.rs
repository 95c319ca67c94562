//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_MAX_CAUSE_DEPTH;
use crate::error::SinkResult;

use super::loader::{self, ConfigWarning};

pub use crate::domain::services::SanitizerKind;
pub use crate::domain::value_objects::LineEnding;

/// How recorded lines are encoded and terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub sanitizer: SanitizerKind,

    #[serde(default)]
    pub line_ending: LineEnding,
}

/// Exception report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionConfig {
    /// Causes rendered below the outermost error before truncating
    #[serde(default = "default_max_cause_depth")]
    pub max_cause_depth: usize,
}

impl Default for ExceptionConfig {
    fn default() -> Self {
        Self {
            max_cause_depth: default_max_cause_depth(),
        }
    }
}

fn default_max_cause_depth() -> usize {
    DEFAULT_MAX_CAUSE_DEPTH
}

/// Main sink configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SinkConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub exceptions: ExceptionConfig,
}

impl SinkConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SinkResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SinkResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `path` when given and readable, else defaults; env applied last
    pub fn load_or_default(path: Option<&Path>) -> Self {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (PROGRESS_SINK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
