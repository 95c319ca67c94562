#![no_main]

use libfuzzer_sys::fuzz_target;
use progress_sink::{ProgressReporter, Severity, StatusSink};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(message) = std::str::from_utf8(rest) else {
        return;
    };

    let severity = match selector % 3 {
        0 => Severity::Info,
        1 => Severity::Warning,
        _ => Severity::Error,
    };

    let mut sink = StatusSink::new();
    let _ = sink.report_status(message, severity, &[&selector]);
    let _ = sink.report_status(message, severity, &[]);

    // Lines without arguments are always recorded
    assert!(!sink.output().is_empty());
    assert_eq!(sink.has_errors(), severity == Severity::Error);
});
