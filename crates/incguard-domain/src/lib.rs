//! Pure include-guard evaluation (no IO).
//!
//! Input: header descriptors and the guard macros observed by the host scanner.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod canonical;
pub mod guard;
pub mod model;
pub mod policy;
pub mod report;
pub mod rule;

mod engine;
mod fingerprint;
pub mod checks;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use canonical::{GUARD_PREFIX, GUARD_SUFFIX, canonicalize, is_canonical_guard, sanitize};
pub use engine::{evaluate, evaluate_with};
pub use guard::{ABSENT_GUARD_TOKEN, GuardFinding, GuardViolation, HeaderDescriptor, check, file_stem};
pub use rule::{MacroNameHook, RULE_GENERIC_MISSING_INCLUDE_GUARD, RuleRegistry, include_guard_hook};
