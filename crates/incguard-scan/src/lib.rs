//! Host scanner adapters: read the header hand-over and build the header model.
//!
//! The host analyzer discovers headers and lexes their guards; this crate only
//! consumes its output. It is allowed to read files but never parses C sources.

#![forbid(unsafe_code)]

mod error;
mod parse;

use camino::Utf8Path;
use incguard_domain::model::HeaderModel;

pub use error::ScanError;
pub use parse::parse_scan_json;

/// Read and parse an `incguard.scan.v1` file.
pub fn read_scan_file(path: &Utf8Path) -> Result<HeaderModel, ScanError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_string(),
        source,
    })?;
    let model = parse_scan_json(&text)?;
    tracing::debug!(path = %path, headers = model.headers.len(), "read header scan");
    Ok(model)
}
