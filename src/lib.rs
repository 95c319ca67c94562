//! progress-sink - status and progress reporting for long-running work
//!
//! A producer reports status lines, exceptions, transient updates and a
//! completion percentage through the [`ProgressReporter`] trait. The
//! [`StatusSink`] implementation keeps a markup-safe, severity-partitioned
//! record in memory; [`JsonLinesReporter`] and [`TracingReporter`] stream
//! the same reports elsewhere.
//!
//! ```
//! use progress_sink::{ProgressReporter, Severity, StatusSink};
//!
//! let mut sink = StatusSink::new();
//! sink.report_status("Loaded {0} items", Severity::Info, &[&42]).unwrap();
//! sink.report_status("Bad <tag>", Severity::Warning, &[]).unwrap();
//! sink.report(50);
//!
//! assert_eq!(sink.output(), "Info: Loaded 42 items\nWarning: Bad &lt;tag&gt;\n");
//! assert!(sink.has_warnings());
//! assert_eq!(sink.progress(), 50);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod status;

// Re-exports for convenience
pub use config::{ConfigWarning, SinkConfig};
pub use domain::entities::ErrorReport;
pub use domain::ports::{NoopReporter, ProgressReporter, ReportableError};
pub use domain::services::{
    format_template, html_encode, ExceptionRenderer, Sanitizer, SanitizerKind,
};
pub use domain::value_objects::{LineEnding, Severity};
pub use error::{FormatError, SinkError, SinkResult};
pub use infrastructure::{JsonLinesReporter, TracingReporter};
pub use status::{ExceptionHook, StatusSink, StatusSnapshot};
