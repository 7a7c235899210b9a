#![no_main]

use libfuzzer_sys::fuzz_target;

use mystic::extractor::extract_html;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    // Arbitrary markup must yield a record or a MalformedDocument, never a panic
    let _ = extract_html(&html, "https://example.com/wiki/Fuzz");
});
