//! Scenario: a host loads sink settings from a TOML file and installs a
//! hook that stands in for a debugger break.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use progress_sink::{LineEnding, ProgressReporter, ReportableError, SinkConfig, StatusSink};
use tempfile::tempdir;

use crate::common::{boom_with_root_cause, PLAIN_CRLF_CONFIG};

#[test]
fn scenario_config_file_drives_sink() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sink.toml");
    fs::write(&path, PLAIN_CRLF_CONFIG).unwrap();

    let (config, warnings) = SinkConfig::load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.output.line_ending, LineEnding::CrLf);

    let breaks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&breaks);
    let mut sink = StatusSink::from_config(&config).with_exception_hook(
        move |_: &dyn ReportableError| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    sink.report_warning("raw <markup> kept", &[]).unwrap();
    sink.report_exception(&boom_with_root_cause()).unwrap();

    assert_eq!(sink.warnings(), "Warning: raw <markup> kept\r\n");
    assert_eq!(
        sink.errors(),
        "Error: ERROR: boom (IOError)\r\nNo stack trace available.\r\nINNER EXCEPTION\r\nroot cause (ValueError)\r\nNo stack trace available.\r\n"
    );
    assert_eq!(breaks.load(Ordering::SeqCst), 1);
}

#[test]
fn scenario_typo_in_config_is_flagged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sink.toml");
    fs::write(&path, "[exceptions]\nmax_cause_dept = 3\n").unwrap();

    let (config, warnings) = SinkConfig::load_with_warnings(&path).unwrap();

    assert_eq!(config, SinkConfig::default());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "max_cause_dept");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("max_cause_depth"));
}

#[test]
fn scenario_unparsable_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sink.toml");
    fs::write(&path, "[output\nsanitizer = ").unwrap();

    assert!(SinkConfig::load(&path).is_err());

    let config = SinkConfig::load_or_default(Some(&path));
    let mut sink = StatusSink::from_config(&config);
    sink.report_info("still works", &[]).unwrap();

    assert!(sink.output().starts_with("Info: still works"));
}
