//! Fuzz target for guard canonicalization and checking.
//!
//! Goal: `check` is total and always agrees with `canonicalize`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_guard_check
//! ```

#![no_main]

use arbitrary::Arbitrary;
use incguard_domain::{GuardFinding, canonicalize, check, file_stem, is_canonical_guard};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct GuardInput {
    header: String,
    observed: Option<String>,
}

fuzz_target!(|input: GuardInput| {
    let stem = file_stem(&input.header);
    let expected = canonicalize(stem);
    assert!(is_canonical_guard(&expected));
    assert_eq!(
        expected.chars().count(),
        stem.chars().count() + "FOXBMS__".len() + "_H_".len()
    );

    match check(Some(input.header.as_str()), input.observed.as_deref()) {
        GuardFinding::Ok => assert_eq!(input.observed.as_deref(), Some(expected.as_str())),
        GuardFinding::Violation(v) => {
            assert_eq!(v.expected, expected);
            assert_ne!(input.observed.as_deref(), Some(expected.as_str()));
        }
    }

    // The same guard for the right header always passes.
    assert!(check(Some(input.header.as_str()), Some(expected.as_str())).is_ok());
});
