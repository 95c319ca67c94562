//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod line_ending;
mod severity;

pub use line_ending::LineEnding;
pub use severity::Severity;
