use crate::guard::HeaderDescriptor;
use incguard_types::RepoPath;

/// Headers handed over by the host scanner, in scan order.
#[derive(Clone, Debug, Default)]
pub struct HeaderModel {
    pub headers: Vec<HeaderEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderEntry {
    pub path: RepoPath,

    /// Guard macro found by the scanner; `None` when the header has no guard.
    pub observed_guard: Option<String>,

    /// 1-based line of the `#ifndef`, when the scanner reports one.
    pub line: Option<u32>,
}

impl HeaderEntry {
    pub fn new(path: impl AsRef<str>, observed_guard: Option<&str>) -> Self {
        Self {
            path: RepoPath::new(path),
            observed_guard: observed_guard.map(str::to_string),
            line: None,
        }
    }
}

impl HeaderDescriptor for HeaderEntry {
    fn file_name(&self) -> &str {
        self.path.as_str()
    }
}
