//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_HEADERS_INCLUDE_GUARD: &str = "headers.include_guard";

// Codes: headers.include_guard
pub const CODE_MISSING_INCLUDE_GUARD: &str = "missing_include_guard";
pub const CODE_INCLUDE_GUARD_MISMATCH: &str = "include_guard_mismatch";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
