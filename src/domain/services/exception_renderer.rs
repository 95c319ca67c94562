//! Exception block rendering
//!
//! Flattens an error and its cause chain into the multi-line text that is
//! recorded at Error severity.

use std::collections::HashSet;

use crate::domain::ports::ReportableError;
use crate::domain::value_objects::LineEnding;

pub const NO_STACK_TRACE: &str = "No stack trace available.";
pub const INNER_EXCEPTION: &str = "INNER EXCEPTION";
pub const DEFAULT_MAX_CAUSE_DEPTH: usize = 32;

/// Renders exception blocks with a bounded, cycle-checked cause walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionRenderer {
    max_cause_depth: usize,
    line_ending: LineEnding,
}

impl Default for ExceptionRenderer {
    fn default() -> Self {
        Self {
            max_cause_depth: DEFAULT_MAX_CAUSE_DEPTH,
            line_ending: LineEnding::Lf,
        }
    }
}

impl ExceptionRenderer {
    pub fn new(max_cause_depth: usize, line_ending: LineEnding) -> Self {
        Self {
            max_cause_depth,
            line_ending,
        }
    }

    pub fn max_cause_depth(&self) -> usize {
        self.max_cause_depth
    }

    /// Render `error` as
    ///
    /// ```text
    /// ERROR: {message} ({type})
    /// {trace | No stack trace available.}
    /// INNER EXCEPTION
    /// {message} ({type})
    /// {trace | No stack trace available.}
    /// ```
    ///
    /// with one `INNER EXCEPTION` block per cause. A repeated cause or a
    /// chain deeper than `max_cause_depth` ends with a truncation marker.
    pub fn render(&self, error: &dyn ReportableError) -> String {
        let mut lines = vec![
            format!("ERROR: {} ({})", error.message(), error.type_name()),
            trace_or_placeholder(error),
        ];

        let mut visited: HashSet<(*const (), String)> = HashSet::new();
        visited.insert(identity(error));

        let mut depth = 0;
        let mut next = error.cause();
        while let Some(cause) = next {
            if !visited.insert(identity(cause)) {
                tracing::warn!(depth, "cause chain contains a cycle; truncating");
                lines.push(format!("{INNER_EXCEPTION} CHAIN TRUNCATED: cycle detected"));
                break;
            }
            if depth == self.max_cause_depth {
                tracing::warn!(
                    max_cause_depth = self.max_cause_depth,
                    "cause chain too deep; truncating"
                );
                lines.push(format!(
                    "{INNER_EXCEPTION} CHAIN TRUNCATED: more than {} nested causes",
                    self.max_cause_depth
                ));
                break;
            }

            lines.push(INNER_EXCEPTION.to_string());
            lines.push(format!("{} ({})", cause.message(), cause.type_name()));
            lines.push(trace_or_placeholder(cause));

            depth += 1;
            next = cause.cause();
        }

        lines.join(self.line_ending.as_str())
    }
}

fn trace_or_placeholder(error: &dyn ReportableError) -> String {
    error
        .stack_trace()
        .map(|trace| trace.trim().to_string())
        .unwrap_or_else(|| NO_STACK_TRACE.to_string())
}

/// Data address plus type label; an inline cause at offset 0 shares its
/// parent's address.
fn identity(error: &dyn ReportableError) -> (*const (), String) {
    (
        std::ptr::from_ref(error).cast::<()>(),
        error.type_name().into_owned(),
    )
}
