use crate::model::{HeaderEntry, HeaderModel};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use incguard_types::Severity;
use std::collections::BTreeMap;

pub fn header(path: &str, guard: Option<&str>) -> HeaderEntry {
    HeaderEntry::new(path, guard)
}

pub fn model(headers: Vec<HeaderEntry>) -> HeaderModel {
    HeaderModel { headers }
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    config_with_check_allow(check_id, severity, Vec::new())
}

pub fn config_with_check_allow(
    check_id: &str,
    severity: Severity,
    allow: Vec<&str>,
) -> EffectiveConfig {
    let mut policy = CheckPolicy::enabled(severity);
    policy.allow = allow.into_iter().map(str::to_string).collect();

    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), policy);

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}
