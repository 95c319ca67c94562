//! Reportable Error Port
//!
//! The view of an error that progress reporters render: a message, a type
//! name, an optional stack trace and an optional chained cause.

use std::borrow::Cow;

/// An error that can be rendered into a diagnostic report.
///
/// `cause()` walks outward-to-innermost. Implementations backed by shared
/// pointers may form a cycle; renderers must not assume the chain ends.
pub trait ReportableError {
    /// Human-readable message
    fn message(&self) -> Cow<'_, str>;

    /// Fully-qualified type name shown next to the message
    fn type_name(&self) -> Cow<'_, str>;

    /// Captured stack trace, if any
    fn stack_trace(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// The error that triggered this one
    fn cause(&self) -> Option<&dyn ReportableError> {
        None
    }
}
