#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        // Bad templates must come back as errors, never panics
        let _ = progress_sink::format_template(template, &[&1, &"two", &3.5]);
    }
});
