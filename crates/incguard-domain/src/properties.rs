//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - canonical guard shape and length
//! - agreement and disagreement of the guard check
//! - deterministic engine output

use crate::canonical::{GUARD_PREFIX, GUARD_SUFFIX, canonicalize, is_canonical_guard, sanitize};
use crate::engine::evaluate;
use crate::guard::{ABSENT_GUARD_TOKEN, check, file_stem};
use crate::model::{HeaderEntry, HeaderModel};
use crate::test_support::config_with_check;
use incguard_types::{Severity, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Header stems as they appear in the firmware tree, plus a few odd ones.
fn arb_stem() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9_-]{0,23}").unwrap(),
        prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9 .+_-]{0,23}").unwrap(),
    ]
}

/// Repo-relative directory prefix (possibly empty).
fn arb_dir() -> impl Strategy<Value = String> {
    prop::string::string_regex("([a-z][a-z0-9_]{0,8}/){0,3}").unwrap()
}

/// Header path whose stem is known: `<dir><stem>.h`.
fn arb_header() -> impl Strategy<Value = (String, String)> {
    (arb_dir(), arb_stem()).prop_map(|(dir, stem)| (format!("{dir}{stem}.h"), stem))
}

proptest! {
    // P1 + P2
    #[test]
    fn canonical_guard_has_shape_and_alphabet(s in ".*") {
        let guard = canonicalize(&s);
        prop_assert!(guard.starts_with(GUARD_PREFIX));
        prop_assert!(guard.ends_with(GUARD_SUFFIX));
        prop_assert!(guard.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(is_canonical_guard(&guard));
    }

    // P3
    #[test]
    fn canonicalize_is_deterministic(s in ".*") {
        prop_assert_eq!(canonicalize(&s), canonicalize(&s));
    }

    // P4, counted in chars
    #[test]
    fn canonical_length_is_input_plus_eleven(s in ".*") {
        prop_assert_eq!(canonicalize(&s).chars().count(), s.chars().count() + 11);
    }

    #[test]
    fn sanitize_is_idempotent(s in ".*") {
        let once = sanitize(&s);
        prop_assert_eq!(sanitize(&once), once.clone());
    }

    // P5
    #[test]
    fn absent_header_is_always_ok(observed in proptest::option::of(".*")) {
        prop_assert!(check::<str>(None, observed.as_deref()).is_ok());
    }

    // P6
    #[test]
    fn canonical_guard_is_accepted((path, stem) in arb_header()) {
        prop_assert_eq!(file_stem(&path), stem.as_str());
        let expected = canonicalize(&stem);
        prop_assert!(check(Some(path.as_str()), Some(expected.as_str())).is_ok());
    }

    // P7 + P8
    #[test]
    fn any_other_guard_is_a_violation(
        (path, stem) in arb_header(),
        observed in proptest::option::of("[A-Za-z_][A-Za-z0-9_]{0,31}"),
    ) {
        let expected = canonicalize(&stem);
        prop_assume!(observed.as_deref() != Some(expected.as_str()));

        let finding = check(Some(path.as_str()), observed.as_deref());
        let violation = finding.violation();
        prop_assert!(violation.is_some());
        let message = &violation.unwrap().message;
        let quoted = format!("'{}'", expected);
        prop_assert!(message.contains(&quoted));
        prop_assert!(message.contains(observed.as_deref().unwrap_or(ABSENT_GUARD_TOKEN)));
    }

    #[test]
    fn evaluate_is_deterministic_and_counts_violations(
        headers in prop::collection::vec((arb_header(), any::<bool>()), 0..16),
    ) {
        let model = HeaderModel {
            headers: headers
                .iter()
                .map(|((path, stem), canonical)| {
                    let guard = canonical.then(|| canonicalize(stem));
                    HeaderEntry::new(path, guard.as_deref())
                })
                .collect(),
        };
        let cfg = config_with_check(ids::CHECK_HEADERS_INCLUDE_GUARD, Severity::Error);

        let first = evaluate(&model, &cfg);
        let second = evaluate(&model, &cfg);
        prop_assert_eq!(&first.findings, &second.findings);

        let violations = headers.iter().filter(|(_, canonical)| !canonical).count();
        prop_assert_eq!(first.findings.len(), violations);
        prop_assert_eq!(first.data.headers_scanned as usize, headers.len());
    }
}
