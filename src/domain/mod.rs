//! Domain Layer
//!
//! Reporting concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Owned error chains (ErrorReport)
//! - `value_objects/` - Immutable value types (Severity, LineEnding)
//! - `services/` - Template formatting, sanitizing, exception rendering
//! - `ports/` - Interface definitions (ProgressReporter, ReportableError)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
