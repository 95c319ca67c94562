//! Tracing Reporter
//!
//! Forwards reports to the `tracing` subscriber installed by the host.
//! Transient status is emitted at DEBUG and progress at TRACE.

use std::fmt;

use crate::domain::ports::{ProgressReporter, ReportableError};
use crate::domain::services::{format_template, ExceptionRenderer};
use crate::domain::value_objects::Severity;
use crate::error::SinkResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter {
    renderer: ExceptionRenderer,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderer(renderer: ExceptionRenderer) -> Self {
        Self { renderer }
    }
}

impl ProgressReporter for TracingReporter {
    fn report_status(
        &mut self,
        message: &str,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        let message = if args.is_empty() {
            message.to_string()
        } else {
            format_template(message, args)?
        };

        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
        Ok(())
    }

    fn report_exception(&mut self, error: &dyn ReportableError) -> SinkResult<()> {
        let report = self.renderer.render(error);
        tracing::error!(error_type = %error.type_name(), "{report}");
        Ok(())
    }

    fn report(&mut self, percent: i32) {
        tracing::trace!(percent, "progress");
    }

    fn report_transient_status(
        &mut self,
        message: &str,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        if args.is_empty() {
            tracing::debug!(transient = true, "{message}");
        } else {
            let message = format_template(message, args)?;
            tracing::debug!(transient = true, "{message}");
        }
        Ok(())
    }
}
