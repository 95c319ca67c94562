//! Progress Reporter Port
//!
//! The capability a long-running process reports into. Implementations:
//! - `StatusSink`: in-memory, markup-safe record
//! - `JsonLinesReporter`: NDJSON stream for log files and CI
//! - `TracingReporter`: forwards to `tracing`
//! - `NoopReporter`: silent operation

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use super::ReportableError;
use crate::domain::value_objects::Severity;
use crate::error::SinkResult;

/// Trait for receiving progress and status reports
pub trait ProgressReporter {
    /// Report a status line. `args` are substituted into `{N}` placeholders
    /// when non-empty; otherwise `message` is used verbatim.
    fn report_status(
        &mut self,
        message: &str,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()>;

    /// Report an error together with its cause chain
    fn report_exception(&mut self, error: &dyn ReportableError) -> SinkResult<()>;

    /// Report completion percentage. Not clamped, not required to increase.
    fn report(&mut self, percent: i32);

    /// Report ephemeral status text that is not part of the permanent record
    fn report_transient_status(
        &mut self,
        message: &str,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()>;

    fn report_info(&mut self, message: &str, args: &[&dyn fmt::Display]) -> SinkResult<()> {
        self.report_status(message, Severity::Info, args)
    }

    fn report_warning(&mut self, message: &str, args: &[&dyn fmt::Display]) -> SinkResult<()> {
        self.report_status(message, Severity::Warning, args)
    }

    fn report_error(&mut self, message: &str, args: &[&dyn fmt::Display]) -> SinkResult<()> {
        self.report_status(message, Severity::Error, args)
    }
}

/// No-op reporter for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report_status(
        &mut self,
        _message: &str,
        _severity: Severity,
        _args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        Ok(())
    }

    fn report_exception(&mut self, _error: &dyn ReportableError) -> SinkResult<()> {
        Ok(())
    }

    fn report(&mut self, _percent: i32) {}

    fn report_transient_status(
        &mut self,
        _message: &str,
        _args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        Ok(())
    }
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &mut R {
    fn report_status(
        &mut self,
        message: &str,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        (**self).report_status(message, severity, args)
    }

    fn report_exception(&mut self, error: &dyn ReportableError) -> SinkResult<()> {
        (**self).report_exception(error)
    }

    fn report(&mut self, percent: i32) {
        (**self).report(percent)
    }

    fn report_transient_status(
        &mut self,
        message: &str,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        (**self).report_transient_status(message, args)
    }
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for Box<R> {
    fn report_status(
        &mut self,
        message: &str,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        (**self).report_status(message, severity, args)
    }

    fn report_exception(&mut self, error: &dyn ReportableError) -> SinkResult<()> {
        (**self).report_exception(error)
    }

    fn report(&mut self, percent: i32) {
        (**self).report(percent)
    }

    fn report_transient_status(
        &mut self,
        message: &str,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        (**self).report_transient_status(message, args)
    }
}

/// Shared reporter for several producers. Each call holds the lock for its
/// whole duration so entries never interleave.
impl<R: ProgressReporter> ProgressReporter for Arc<Mutex<R>> {
    fn report_status(
        &mut self,
        message: &str,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .report_status(message, severity, args)
    }

    fn report_exception(&mut self, error: &dyn ReportableError) -> SinkResult<()> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .report_exception(error)
    }

    fn report(&mut self, percent: i32) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .report(percent)
    }

    fn report_transient_status(
        &mut self,
        message: &str,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .report_transient_status(message, args)
    }
}
