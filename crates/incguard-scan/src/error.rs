use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse header scan json")]
    Json(#[from] serde_json::Error),

    #[error("unsupported scan schema: {0} (expected incguard.scan.v1)")]
    UnsupportedSchema(String),

    #[error("header #{index} has an empty path")]
    EmptyPath { index: usize },

    #[error("header listed more than once: {path}")]
    DuplicateHeader { path: String },
}
