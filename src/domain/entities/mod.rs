//! Domain Entities
//!
//! - `ErrorReport` - An owned error with its cause chain

mod error_report;

pub use error_report::{ErrorReport, MAX_CAPTURED_SOURCES, SOURCE_TYPE_NAME};
