//! Domain Services
//!
//! Pure functions and services used by reporters.
//! These services have no I/O dependencies and are easily testable.

mod exception_renderer;
mod sanitize;
mod template;

pub use exception_renderer::{
    ExceptionRenderer, DEFAULT_MAX_CAUSE_DEPTH, INNER_EXCEPTION, NO_STACK_TRACE,
};
pub use sanitize::{html_encode, passthrough, Sanitizer, SanitizerKind};
pub use template::format_template;
