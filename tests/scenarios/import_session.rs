//! Scenario: an import job reports into an in-memory sink and a page renders
//! the result afterwards.

use progress_sink::{ErrorReport, ProgressReporter, Severity, StatusSink};

use crate::common::boom_with_root_cause;

/// Stand-in producer: walks items, reports progress, fails on one of them.
fn run_import(reporter: &mut impl ProgressReporter, items: &[&str]) -> anyhow::Result<()> {
    reporter.report_status("Loaded {0} items", Severity::Info, &[&items.len()])?;

    for (i, item) in items.iter().enumerate() {
        reporter.report_transient_status("processed item {0} of {1}", &[&(i + 1), &items.len()])?;

        if item.contains('<') {
            reporter.report_warning("Skipped suspicious item {0}", &[item])?;
        }
        if item.is_empty() {
            reporter.report_exception(&boom_with_root_cause())?;
        }

        let percent = ((i + 1) * 100 / items.len()) as i32;
        reporter.report(percent);
    }

    reporter.report_info("Import finished", &[])?;
    Ok(())
}

#[test]
fn scenario_clean_import() {
    let mut sink = StatusSink::new();
    run_import(&mut sink, &["a", "b", "c", "d"]).unwrap();

    assert_eq!(sink.output(), "Info: Loaded 4 items\nInfo: Import finished\n");
    assert!(!sink.has_errors());
    assert!(!sink.has_warnings());
    assert_eq!(sink.progress(), 100);
}

#[test]
fn scenario_import_with_problems() {
    let mut sink = StatusSink::new();
    run_import(&mut sink, &["ok", "<b>", "", "fine"]).unwrap();

    assert!(sink.has_warnings());
    assert_eq!(sink.warnings(), "Warning: Skipped suspicious item &lt;b&gt;\n");

    assert!(sink.has_errors());
    let errors = sink.errors();
    assert!(errors.contains("boom (IOError)"));
    assert!(errors.contains("No stack trace available."));
    assert!(errors.contains("INNER EXCEPTION"));
    assert!(errors.contains("root cause (ValueError)"));

    let output = sink.output();
    assert!(output.starts_with("Info: Loaded 4 items\n"));
    assert!(output.ends_with("Info: Import finished\n"));
    assert!(!output.contains("processed item"));
    assert_eq!(sink.output_lines().len(), 4);
}

#[test]
fn scenario_anyhow_failure_is_recorded() {
    let mut sink = StatusSink::plain();

    let failure = std::fs::read_to_string("/definitely/not/here/settings.toml")
        .map_err(anyhow::Error::from)
        .map_err(|e| e.context("loading import settings"))
        .unwrap_err();
    sink.report_exception(&ErrorReport::from(&failure)).unwrap();

    let errors = sink.errors();
    assert!(errors.starts_with("Error: ERROR: loading import settings (anyhow::Error)\n"));
    assert!(errors.contains("INNER EXCEPTION\n"));
    assert!(errors.contains("(dyn std::error::Error)"));
}

#[test]
fn scenario_producer_sees_format_errors() {
    let mut sink = StatusSink::new();
    sink.report_info("first", &[]).unwrap();

    let result = sink.report_status("{0} of {1}", Severity::Warning, &[&1]);

    assert!(result.is_err());
    assert_eq!(sink.output(), "Info: first\n");
    assert!(!sink.has_warnings());
}
