//! In-memory status sink

use std::fmt;

use crate::config::SinkConfig;
use crate::domain::ports::{ProgressReporter, ReportableError};
use crate::domain::services::{format_template, ExceptionRenderer, Sanitizer, SanitizerKind};
use crate::domain::value_objects::{LineEnding, Severity};
use crate::error::SinkResult;

use super::snapshot::StatusSnapshot;

/// Callback invoked after every reported exception
pub type ExceptionHook = Box<dyn FnMut(&dyn ReportableError) + Send>;

/// Progress reporter that records every permanent report in memory.
///
/// Each recorded entry is `"{Severity}: {message}"`, passed through the
/// sanitizer. Error and Warning entries are also kept in their own buffers.
/// Transient status is discarded.
pub struct StatusSink {
    output: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
    progress: i32,
    sanitize: Sanitizer,
    line_ending: LineEnding,
    renderer: ExceptionRenderer,
    on_exception: Option<ExceptionHook>,
}

impl Default for StatusSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink {
    /// Empty sink with HTML encoding and `\n` line endings
    pub fn new() -> Self {
        Self::from_config(&SinkConfig::default())
    }

    pub fn from_config(config: &SinkConfig) -> Self {
        Self {
            output: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            progress: 0,
            sanitize: config.output.sanitizer.sanitizer(),
            line_ending: config.output.line_ending,
            renderer: ExceptionRenderer::new(
                config.exceptions.max_cause_depth,
                config.output.line_ending,
            ),
            on_exception: None,
        }
    }

    /// Empty sink that records text unchanged
    pub fn plain() -> Self {
        Self::new().with_sanitizer(SanitizerKind::None.sanitizer())
    }

    pub fn with_sanitizer(mut self, sanitize: Sanitizer) -> Self {
        self.sanitize = sanitize;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self.renderer = ExceptionRenderer::new(self.renderer.max_cause_depth(), line_ending);
        self
    }

    pub fn with_max_cause_depth(mut self, max_cause_depth: usize) -> Self {
        self.renderer = ExceptionRenderer::new(max_cause_depth, self.line_ending);
        self
    }

    /// Install a hook run after each `report_exception`, e.g. to trap into
    /// a debugger.
    pub fn with_exception_hook(
        mut self,
        hook: impl FnMut(&dyn ReportableError) + Send + 'static,
    ) -> Self {
        self.on_exception = Some(Box::new(hook));
        self
    }

    /// Every recorded entry, each followed by the line ending
    pub fn output(&self) -> String {
        self.join(&self.output)
    }

    /// Error entries, each followed by the line ending
    pub fn errors(&self) -> String {
        self.join(&self.errors)
    }

    /// Warning entries, each followed by the line ending
    pub fn warnings(&self) -> String {
        self.join(&self.warnings)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn output_lines(&self) -> &[String] {
        &self.output
    }

    pub fn error_lines(&self) -> &[String] {
        &self.errors
    }

    pub fn warning_lines(&self) -> &[String] {
        &self.warnings
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            output: self.output(),
            errors: self.errors(),
            warnings: self.warnings(),
            progress: self.progress,
            has_errors: self.has_errors(),
            has_warnings: self.has_warnings(),
        }
    }

    fn join(&self, entries: &[String]) -> String {
        let terminator = self.line_ending.as_str();
        let mut text = String::with_capacity(
            entries.iter().map(|e| e.len() + terminator.len()).sum(),
        );
        for entry in entries {
            text.push_str(entry);
            text.push_str(terminator);
        }
        text
    }

    fn record(&mut self, severity: Severity, line: String) {
        tracing::trace!(%severity, len = line.len(), "status recorded");
        match severity {
            Severity::Error => self.errors.push(line.clone()),
            Severity::Warning => self.warnings.push(line.clone()),
            Severity::Info => {}
        }
        self.output.push(line);
    }
}

impl ProgressReporter for StatusSink {
    fn report_status(
        &mut self,
        message: &str,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        let formatted = if args.is_empty() {
            message.to_string()
        } else {
            format_template(message, args)?
        };

        let line = (self.sanitize)(&format!("{severity}: {formatted}"));
        self.record(severity, line);
        Ok(())
    }

    fn report_exception(&mut self, error: &dyn ReportableError) -> SinkResult<()> {
        let block = self.renderer.render(error);
        self.report_status(&block, Severity::Error, &[])?;

        if let Some(hook) = self.on_exception.as_mut() {
            hook(error);
        }
        Ok(())
    }

    fn report(&mut self, percent: i32) {
        self.progress = percent;
    }

    fn report_transient_status(
        &mut self,
        _message: &str,
        _args: &[&dyn fmt::Display],
    ) -> SinkResult<()> {
        Ok(())
    }
}

impl fmt::Debug for StatusSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusSink")
            .field("output", &self.output)
            .field("errors", &self.errors)
            .field("warnings", &self.warnings)
            .field("progress", &self.progress)
            .field("line_ending", &self.line_ending)
            .field("renderer", &self.renderer)
            .field("on_exception", &self.on_exception.is_some())
            .finish_non_exhaustive()
    }
}
