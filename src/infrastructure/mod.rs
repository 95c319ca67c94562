//! Infrastructure Layer
//!
//! Concrete implementations of domain ports that perform I/O.
//!
//! ## Structure
//!
//! - `reporters/` - Streaming progress reporters (JSON lines, tracing)

pub mod reporters;

pub use reporters::{JsonLinesReporter, TracingReporter};
