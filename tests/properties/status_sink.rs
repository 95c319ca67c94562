//! Property tests for the in-memory status sink.

use proptest::prelude::*;

use progress_sink::{html_encode, ProgressReporter, Severity, StatusSink};

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

fn report() -> impl Strategy<Value = (Severity, String)> {
    (severity(), "(?s).{0,40}")
}

fn composed(severity: Severity, message: &str) -> String {
    html_encode(&format!("{severity}: {message}"))
}

fn joined<'a>(lines: impl Iterator<Item = &'a String>) -> String {
    lines.map(|line| format!("{line}\n")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: output is every composed line, sanitized, in call order.
    #[test]
    fn property_output_is_ordered_concatenation(
        reports in proptest::collection::vec(report(), 0..=24)
    ) {
        let mut sink = StatusSink::new();
        for (severity, message) in &reports {
            sink.report_status(message, *severity, &[]).unwrap();
        }

        let expected: Vec<String> = reports
            .iter()
            .map(|(severity, message)| composed(*severity, message))
            .collect();

        prop_assert_eq!(sink.output(), joined(expected.iter()));
    }

    /// PROPERTY: errors and warnings are exactly the matching lines of output.
    #[test]
    fn property_severity_buckets_are_filtered_views(
        reports in proptest::collection::vec(report(), 0..=24)
    ) {
        let mut sink = StatusSink::new();
        for (severity, message) in &reports {
            sink.report_status(message, *severity, &[]).unwrap();
        }

        let only = |wanted: Severity| -> Vec<String> {
            reports
                .iter()
                .filter(|(severity, _)| *severity == wanted)
                .map(|(severity, message)| composed(*severity, message))
                .collect()
        };

        let errors = only(Severity::Error);
        let warnings = only(Severity::Warning);
        prop_assert_eq!(sink.error_lines(), errors.as_slice());
        prop_assert_eq!(sink.warning_lines(), warnings.as_slice());
        prop_assert_eq!(
            sink.has_errors(),
            reports.iter().any(|(s, _)| *s == Severity::Error)
        );
        prop_assert_eq!(
            sink.has_warnings(),
            reports.iter().any(|(s, _)| *s == Severity::Warning)
        );
    }

    /// PROPERTY: transient status never changes what readers observe.
    #[test]
    fn property_transient_status_is_invisible(
        before in proptest::collection::vec(report(), 0..=8),
        transient in proptest::collection::vec("(?s).{0,40}", 1..=8),
        percent in any::<i32>(),
    ) {
        let mut sink = StatusSink::new();
        for (severity, message) in &before {
            sink.report_status(message, *severity, &[]).unwrap();
        }
        sink.report(percent);
        let snapshot = sink.snapshot();

        for message in &transient {
            sink.report_transient_status(message, &[&percent]).unwrap();
        }

        prop_assert_eq!(sink.snapshot(), snapshot);
    }

    /// PROPERTY: progress is exactly the last reported value.
    #[test]
    fn property_progress_is_last_report(
        percents in proptest::collection::vec(any::<i32>(), 1..=16)
    ) {
        let mut sink = StatusSink::new();
        for percent in &percents {
            sink.report(*percent);
            prop_assert_eq!(sink.progress(), *percent);
        }
        prop_assert_eq!(sink.progress(), *percents.last().unwrap());
    }
}
