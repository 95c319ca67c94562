//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! The status sink and infrastructure reporters provide implementations.

pub mod progress_reporter;
pub mod reportable_error;

pub use progress_reporter::{NoopReporter, ProgressReporter};
pub use reportable_error::ReportableError;
