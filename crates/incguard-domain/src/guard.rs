//! The include-guard check for a single header.

use crate::canonical::canonicalize;
use camino::{Utf8Path, Utf8PathBuf};
use incguard_types::RepoPath;

/// Rendering of a missing guard inside diagnostics.
pub const ABSENT_GUARD_TOKEN: &str = "<none>";

/// A header as handed over by the host analyzer.
///
/// Only the file name (or path) is consumed; the stem used for
/// canonicalization is derived from it with [`file_stem`].
pub trait HeaderDescriptor {
    fn file_name(&self) -> &str;
}

impl HeaderDescriptor for str {
    fn file_name(&self) -> &str {
        self
    }
}

impl HeaderDescriptor for String {
    fn file_name(&self) -> &str {
        self.as_str()
    }
}

impl HeaderDescriptor for Utf8Path {
    fn file_name(&self) -> &str {
        self.as_str()
    }
}

impl HeaderDescriptor for Utf8PathBuf {
    fn file_name(&self) -> &str {
        self.as_str()
    }
}

impl HeaderDescriptor for RepoPath {
    fn file_name(&self) -> &str {
        self.as_str()
    }
}

/// Last path segment with only the final extension removed.
///
/// Both `/` and `\` separate directories and trailing separators are
/// ignored. A dot counts as an extension separator only when it is neither
/// the first nor the last character of the segment, so `.config` and
/// `notes.` are returned unchanged.
pub fn file_stem(path: &str) -> &str {
    let path = path.trim_end_matches(['/', '\\']);
    let name = match path.rfind(|c| c == '/' || c == '\\') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => &name[..i],
        _ => name,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardViolation {
    pub expected: String,
    pub observed: Option<String>,
    pub message: String,
}

/// Outcome of checking one header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardFinding {
    Ok,
    Violation(GuardViolation),
}

impl GuardFinding {
    pub fn is_ok(&self) -> bool {
        matches!(self, GuardFinding::Ok)
    }

    pub fn violation(&self) -> Option<&GuardViolation> {
        match self {
            GuardFinding::Ok => None,
            GuardFinding::Violation(v) => Some(v),
        }
    }

    /// Diagnostic text for a violation, `None` when there is nothing to report.
    pub fn into_diagnostic(self) -> Option<String> {
        match self {
            GuardFinding::Ok => None,
            GuardFinding::Violation(v) => Some(v.message),
        }
    }
}

/// Compare the observed guard of `header` against its canonical guard.
///
/// An absent header means there is nothing to check. An absent `observed`
/// is always a violation.
pub fn check<H>(header: Option<&H>, observed: Option<&str>) -> GuardFinding
where
    H: HeaderDescriptor + ?Sized,
{
    let Some(header) = header else {
        return GuardFinding::Ok;
    };

    let expected = canonicalize(file_stem(header.file_name()));
    if observed == Some(expected.as_str()) {
        return GuardFinding::Ok;
    }

    let message = format!(
        "Expected include guard is '{}', but found {}.",
        expected,
        observed.unwrap_or(ABSENT_GUARD_TOKEN)
    );
    GuardFinding::Violation(GuardViolation {
        expected,
        observed: observed.map(str::to_string),
        message,
    })
}
