//! Property tests for positional template formatting.

use proptest::prelude::*;

use progress_sink::{format_template, FormatError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `format_template` never panics on arbitrary input.
    #[test]
    fn property_format_never_panics(
        template in "(?s).{0,64}",
        arg in any::<i64>(),
    ) {
        let _ = format_template(&template, &[&arg, &"text"]);
    }

    /// PROPERTY: any alignment width either formats within bounds or is rejected.
    #[test]
    fn property_alignment_is_bounded(width in any::<i64>()) {
        let template = format!("{{0,{width}}}");
        match format_template(&template, &[&"ab"]) {
            Ok(out) => {
                prop_assert!(width.unsigned_abs() < 1_000_000);
                prop_assert_eq!(out.len() as u64, width.unsigned_abs().max(2));
            }
            Err(_) => prop_assert!(width.unsigned_abs() >= 1_000_000),
        }
    }

    /// PROPERTY: brace-free templates come back unchanged.
    #[test]
    fn property_plain_text_is_untouched(
        template in "[^{}]{0,64}"
    ) {
        prop_assert_eq!(format_template(&template, &[&1]).unwrap(), template);
    }

    /// PROPERTY: a placeholder past the argument list is always reported.
    #[test]
    fn property_out_of_range_index_is_an_error(
        arg_count in 1usize..4,
        extra in 0usize..100,
    ) {
        let index = arg_count + extra;
        let args: Vec<String> = (0..arg_count).map(|i| i.to_string()).collect();
        let args: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();

        let err = format_template(&format!("{{{index}}}"), &args).unwrap_err();

        prop_assert_eq!(err, FormatError::IndexOutOfRange { index, arg_count });
    }
}
