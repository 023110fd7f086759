//! Fuzz target for the host scanner hand-over parser.
//!
//! Goal: `parse_scan_json` should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scan_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(model) = incguard_scan::parse_scan_json(text)
    {
        // Accepted scans are sorted and free of duplicates.
        assert!(model.headers.windows(2).all(|w| w[0].path < w[1].path));
    }
});
