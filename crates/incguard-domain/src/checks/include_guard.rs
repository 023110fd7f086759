use super::utils;
use crate::canonical::canonicalize;
use crate::fingerprint::fingerprint_for_header;
use crate::guard::{HeaderDescriptor, file_stem};
use crate::model::HeaderModel;
use crate::policy::EffectiveConfig;
use crate::rule::{RULE_GENERIC_MISSING_INCLUDE_GUARD, RuleRegistry};
use incguard_types::{Finding, Location, ids};
use serde_json::json;

pub fn run(
    model: &HeaderModel,
    cfg: &EffectiveConfig,
    rules: &RuleRegistry,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_HEADERS_INCLUDE_GUARD) else {
        return;
    };
    let allow = utils::build_allowlist(&policy.allow);

    for header in &model.headers {
        if utils::is_allowed(allow.as_ref(), header.path.as_str()) {
            continue;
        }

        let observed = header.observed_guard.as_deref();
        let descriptor: &dyn HeaderDescriptor = header;
        let expected = canonicalize(file_stem(header.path.as_str()));
        let code = if observed.is_some() {
            ids::CODE_INCLUDE_GUARD_MISMATCH
        } else {
            ids::CODE_MISSING_INCLUDE_GUARD
        };

        for message in rules.run(RULE_GENERIC_MISSING_INCLUDE_GUARD, Some(descriptor), observed)
        {
            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_HEADERS_INCLUDE_GUARD.to_string(),
                code: code.to_string(),
                message,
                location: Some(Location {
                    path: header.path.clone(),
                    line: header.line,
                    col: None,
                }),
                help: Some(format!(
                    "Guard the header with `#ifndef {expected}` / `#define {expected}`."
                )),
                url: None,
                fingerprint: Some(fingerprint_for_header(
                    ids::CHECK_HEADERS_INCLUDE_GUARD,
                    code,
                    header.path.as_str(),
                    &expected,
                )),
                data: json!({
                    "rule": RULE_GENERIC_MISSING_INCLUDE_GUARD,
                    "header": header.path.as_str(),
                    "expected": expected,
                    "observed": observed,
                }),
            });
        }
    }
}
