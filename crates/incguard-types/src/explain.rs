//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_HEADERS_INCLUDE_GUARD => Some(explain_include_guard()),

        // Codes
        ids::CODE_MISSING_INCLUDE_GUARD => Some(explain_missing_include_guard()),
        ids::CODE_INCLUDE_GUARD_MISMATCH => Some(explain_include_guard_mismatch()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_HEADERS_INCLUDE_GUARD]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_INCLUDE_GUARD,
        ids::CODE_INCLUDE_GUARD_MISMATCH,
    ]
}

// --- Check-level explanations ---

fn explain_include_guard() -> Explanation {
    Explanation {
        title: "Include Guard Naming",
        description: "\
Every header must be guarded by a macro derived mechanically from its file name.

The expected macro is `FOXBMS__<STEM>_H_`, where `<STEM>` is the file name without
its final extension, upper-cased, with every character outside `[A-Za-z0-9]`
replaced by `_`:
- `adc-driver.h` -> `FOXBMS__ADC_DRIVER_H_`
- `bms2.h` -> `FOXBMS__BMS2_H_`
- `foo.bar.h` -> `FOXBMS__FOO_BAR_H_`

A uniform scheme prevents two headers from silently sharing a guard, which would
make the second one vanish from every translation unit that includes both.",
        remediation: "\
Rename the guard macro in both the `#ifndef` and the `#define` line to the
expected identifier reported in the finding, and update the trailing `#endif`
comment if the file carries one.

Vendored headers that must keep their upstream guard can be exempted with an
allow glob in incguard.toml:

    [checks.\"headers.include_guard\"]
    allow = [\"src/vendor/**\"]",
        examples: ExamplePair {
            before: r#"/* adc-driver.h */
#ifndef ADC_DRIVER_H
#define ADC_DRIVER_H
void ADC_Init(void);
#endif /* ADC_DRIVER_H */"#,
            after: r#"/* adc-driver.h */
#ifndef FOXBMS__ADC_DRIVER_H_
#define FOXBMS__ADC_DRIVER_H_
void ADC_Init(void);
#endif /* FOXBMS__ADC_DRIVER_H_ */"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_missing_include_guard() -> Explanation {
    Explanation {
        title: "Missing Include Guard",
        description: "\
The host scanner found no include guard in the header at all.

Without a guard, including the header twice in one translation unit redefines every
type and macro it declares, which breaks the build or, worse, hides conflicting
definitions behind the first one.",
        remediation: "\
Wrap the whole header body in the expected guard:

    #ifndef FOXBMS__<STEM>_H_
    #define FOXBMS__<STEM>_H_
    ...
    #endif /* FOXBMS__<STEM>_H_ */",
        examples: ExamplePair {
            before: r#"/* bms.h */
#include <stdint.h>
extern uint8_t BMS_GetState(void);"#,
            after: r#"/* bms.h */
#ifndef FOXBMS__BMS_H_
#define FOXBMS__BMS_H_
#include <stdint.h>
extern uint8_t BMS_GetState(void);
#endif /* FOXBMS__BMS_H_ */"#,
        },
    }
}

fn explain_include_guard_mismatch() -> Explanation {
    let mut exp = explain_include_guard();
    exp.title = "Include Guard Mismatch";
    exp
}
