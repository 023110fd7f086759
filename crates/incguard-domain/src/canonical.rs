//! Canonical include-guard identifiers.
//!
//! The project-mandated guard for a header with stem `<stem>` is
//! `FOXBMS__<SANITIZED>_H_`, where every ASCII alphanumeric character of the
//! stem is upper-cased and everything else becomes `_`. There is exactly one
//! output character per input `char`, so lengths line up one to one.

pub const GUARD_PREFIX: &str = "FOXBMS__";
pub const GUARD_SUFFIX: &str = "_H_";

/// Upper-case ASCII alphanumerics, replace everything else with `_`.
///
/// Adjacent separators are not collapsed. Non-ASCII letters are not
/// alphabetic here and map to `_` as well.
pub fn sanitize(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Expected guard macro for a header stem (no directory, no extension).
///
/// Total: the empty stem yields `FOXBMS___H_`.
pub fn canonicalize(file_name: &str) -> String {
    let body = sanitize(file_name);
    let mut out = String::with_capacity(GUARD_PREFIX.len() + body.len() + GUARD_SUFFIX.len());
    out.push_str(GUARD_PREFIX);
    out.push_str(&body);
    out.push_str(GUARD_SUFFIX);
    out
}

/// Whether `ident` has the canonical shape, independent of any header.
pub fn is_canonical_guard(ident: &str) -> bool {
    ident.len() >= GUARD_PREFIX.len() + GUARD_SUFFIX.len()
        && ident.starts_with(GUARD_PREFIX)
        && ident.ends_with(GUARD_SUFFIX)
        && ident
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}
