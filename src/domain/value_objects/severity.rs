//! Severity Value Object
//!
//! Classifies a reported status line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a reported status line
///
/// The `Display` form is the tag prefixed to every recorded line
/// (`Info: ...`, `Warning: ...`, `Error: ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recorded in the full output only
    #[default]
    Info,
    /// Recorded in the full output and the warnings buffer
    Warning,
    /// Recorded in the full output and the errors buffer
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
