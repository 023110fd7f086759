use incguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use incguard_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "compat" => compat_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
    }
}

fn compat_profile() -> EffectiveConfig {
    // Reports everything, fails on nothing unless a check is raised to error.
    EffectiveConfig {
        profile: "compat".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use incguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_HEADERS_INCLUDE_GUARD.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}
