//! Error types for progress-sink
//!
//! Library errors are `thiserror` enums; nothing here is recovered internally.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Main error type for sink operations
#[derive(Error, Debug)]
pub enum SinkError {
    /// Status message placeholders did not match the supplied arguments
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

/// Placeholder substitution failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Placeholder index has no matching argument
    #[error("placeholder index {index} is out of range ({arg_count} argument(s) supplied)")]
    IndexOutOfRange { index: usize, arg_count: usize },

    /// Placeholder could not be parsed
    #[error("malformed placeholder at position {position}")]
    MalformedPlaceholder { position: usize },

    /// Lone `}` outside a placeholder
    #[error("unmatched '}}' at position {position}")]
    UnmatchedClosingBrace { position: usize },

    /// `{N:spec}` form is not supported
    #[error("unsupported format specifier '{specifier}' at position {position}")]
    UnsupportedFormatSpecifier { position: usize, specifier: String },
}
