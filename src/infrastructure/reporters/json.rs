//! JSON Lines Reporter
//!
//! Streams every report as one NDJSON object, for log files and CI.

use std::fmt;
use std::io::{self, Write};

use crate::domain::ports::{ProgressReporter, ReportableError};
use crate::domain::services::{format_template, ExceptionRenderer};
use crate::domain::value_objects::Severity;
use crate::error::SinkResult;

/// Reporter that writes NDJSON events to a writer
pub struct JsonLinesReporter {
    writer: Box<dyn Write + Send>,
    renderer: ExceptionRenderer,
}

impl JsonLinesReporter {
    /// Create a JSON reporter writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON reporter writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            renderer: ExceptionRenderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: ExceptionRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    fn write_event(&mut self, event: serde_json::Value) {
        let result = writeln!(self.writer, "{}", event).and_then(|()| self.writer.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write progress event");
        }
    }
}

fn render_message(message: &str, args: &[&dyn fmt::Display]) -> SinkResult<String> {
    if args.is_empty() {
        Ok(message.to_string())
    } else {
        Ok(format_template(message, args)?)
    }
}

impl ProgressReporter for JsonLinesReporter {
    fn report_status(
        &mut self,
        message: &str,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        let message = render_message(message, args)?;
        self.write_event(serde_json::json!({
            "event": "status",
            "severity": severity,
            "message": message,
        }));
        Ok(())
    }

    fn report_exception(&mut self, error: &dyn ReportableError) -> SinkResult<()> {
        let report = self.renderer.render(error);
        self.write_event(serde_json::json!({
            "event": "exception",
            "severity": Severity::Error,
            "type": error.type_name(),
            "message": error.message(),
            "report": report,
        }));
        Ok(())
    }

    fn report(&mut self, percent: i32) {
        self.write_event(serde_json::json!({
            "event": "progress",
            "percent": percent,
        }));
    }

    fn report_transient_status(
        &mut self,
        message: &str,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        let message = render_message(message, args)?;
        self.write_event(serde_json::json!({
            "event": "transient",
            "message": message,
        }));
        Ok(())
    }
}
