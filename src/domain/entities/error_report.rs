//! Error Report Entity
//!
//! An owned snapshot of an error and its cause chain, built by hand or
//! captured from `std::error::Error` / `anyhow::Error` values.

use std::backtrace::BacktraceStatus;
use std::borrow::Cow;
use std::error::Error as StdError;

use crate::domain::ports::ReportableError;

/// Type label used for chained sources whose concrete type is erased
pub const SOURCE_TYPE_NAME: &str = "dyn std::error::Error";

/// Upper bound on `source()` links followed while capturing a chain
pub const MAX_CAPTURED_SOURCES: usize = 256;

/// Owned error with an optional cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    message: String,
    type_name: String,
    stack_trace: Option<String>,
    cause: Option<Box<ErrorReport>>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            type_name: type_name.into(),
            stack_trace: None,
            cause: None,
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    pub fn with_cause(mut self, cause: ErrorReport) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Capture a `std::error::Error` and its `source()` chain.
    ///
    /// The outermost error keeps its concrete type name; sources are
    /// labelled [`SOURCE_TYPE_NAME`].
    pub fn from_error<E: StdError + 'static>(error: &E) -> Self {
        let sources = std::iter::successors(error.source(), |&e| e.source())
            .take(MAX_CAPTURED_SOURCES)
            .map(|e| ErrorReport::new(e.to_string(), SOURCE_TYPE_NAME));

        chain(
            ErrorReport::new(error.to_string(), std::any::type_name::<E>()),
            sources,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    pub fn cause(&self) -> Option<&ErrorReport> {
        self.cause.as_deref()
    }

    /// Number of errors in the chain, including this one
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |e| e.cause()).count()
    }
}

/// Link `rest` outermost-first beneath `head`.
fn chain(head: ErrorReport, rest: impl Iterator<Item = ErrorReport>) -> ErrorReport {
    let links: Vec<ErrorReport> = rest.collect();
    let inner = links.into_iter().rev().fold(None, |inner, mut link| {
        link.cause = inner.map(Box::new);
        Some(link)
    });
    ErrorReport {
        cause: inner.map(Box::new),
        ..head
    }
}

impl From<&anyhow::Error> for ErrorReport {
    fn from(error: &anyhow::Error) -> Self {
        let backtrace = error.backtrace();
        let stack_trace = (backtrace.status() == BacktraceStatus::Captured)
            .then(|| backtrace.to_string());

        let mut head = ErrorReport::new(error.to_string(), "anyhow::Error");
        head.stack_trace = stack_trace;

        let sources = error
            .chain()
            .skip(1)
            .take(MAX_CAPTURED_SOURCES)
            .map(|e| ErrorReport::new(e.to_string(), SOURCE_TYPE_NAME));

        chain(head, sources)
    }
}

impl From<anyhow::Error> for ErrorReport {
    fn from(error: anyhow::Error) -> Self {
        ErrorReport::from(&error)
    }
}

impl ReportableError for ErrorReport {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.message.as_str())
    }

    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.type_name.as_str())
    }

    fn stack_trace(&self) -> Option<Cow<'_, str>> {
        self.stack_trace.as_deref().map(Cow::Borrowed)
    }

    fn cause(&self) -> Option<&dyn ReportableError> {
        self.cause
            .as_deref()
            .map(|cause| cause as &dyn ReportableError)
    }
}
