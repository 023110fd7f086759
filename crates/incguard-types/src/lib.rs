//! Stable DTOs and IDs used across the incguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical repo-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::RepoPath;
pub use receipt::{
    Finding, IncguardData, IncguardReport, Location, ReportEnvelope, SCHEMA_REPORT_V1,
    SCHEMA_SCAN_V1, Severity, ToolMeta, Verdict,
};
