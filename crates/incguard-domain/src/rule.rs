//! Hook registration for per-header macro-name rules.
//!
//! The host analyzer keys its per-header checks by rule name. A hook returns
//! `Some(diagnostic)` for a finding and `None` when the header passes.

use crate::guard::{HeaderDescriptor, check};
use std::collections::BTreeMap;

/// Rule name the include-guard hook is registered under.
pub const RULE_GENERIC_MISSING_INCLUDE_GUARD: &str = "Generic-MissingIncludeGuard";

pub type MacroNameHook = fn(Option<&dyn HeaderDescriptor>, Option<&str>) -> Option<String>;

/// The include-guard check in hook form.
pub fn include_guard_hook(
    header: Option<&dyn HeaderDescriptor>,
    observed: Option<&str>,
) -> Option<String> {
    check(header, observed).into_diagnostic()
}

/// Rule name -> hooks, in registration order.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    hooks: BTreeMap<String, Vec<MacroNameHook>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in include-guard hook.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(RULE_GENERIC_MISSING_INCLUDE_GUARD, include_guard_hook);
        registry
    }

    pub fn register(&mut self, rule: &str, hook: MacroNameHook) -> &mut Self {
        self.hooks.entry(rule.to_string()).or_default().push(hook);
        self
    }

    pub fn hooks(&self, rule: &str) -> &[MacroNameHook] {
        self.hooks.get(rule).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Run every hook of `rule` and collect the diagnostics.
    pub fn run(
        &self,
        rule: &str,
        header: Option<&dyn HeaderDescriptor>,
        observed: Option<&str>,
    ) -> Vec<String> {
        self.hooks(rule)
            .iter()
            .filter_map(|hook| hook(header, observed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use incguard_types::RepoPath;

    fn always_flag(_: Option<&dyn HeaderDescriptor>, _: Option<&str>) -> Option<String> {
        Some("flagged".to_string())
    }

    #[test]
    fn defaults_register_include_guard_rule() {
        let registry = RuleRegistry::with_defaults();
        assert_eq!(
            registry.rules().collect::<Vec<_>>(),
            vec![RULE_GENERIC_MISSING_INCLUDE_GUARD]
        );
        assert_eq!(registry.hooks(RULE_GENERIC_MISSING_INCLUDE_GUARD).len(), 1);
    }

    #[test]
    fn hook_reports_string_or_nothing() {
        let path = RepoPath::new("inc/adc-driver.h");
        let header: &dyn HeaderDescriptor = &path;
        assert_eq!(include_guard_hook(Some(header), Some("FOXBMS__ADC_DRIVER_H_")), None);
        assert_eq!(
            include_guard_hook(Some(header), Some("ADC_DRIVER_H")).as_deref(),
            Some("Expected include guard is 'FOXBMS__ADC_DRIVER_H_', but found ADC_DRIVER_H.")
        );
        assert_eq!(include_guard_hook(None, Some("anything")), None);
    }

    #[test]
    fn run_collects_diagnostics_in_registration_order() {
        let mut registry = RuleRegistry::with_defaults();
        registry.register(RULE_GENERIC_MISSING_INCLUDE_GUARD, always_flag);

        let path = RepoPath::new("bms.h");
        let header: &dyn HeaderDescriptor = &path;
        let out = registry.run(RULE_GENERIC_MISSING_INCLUDE_GUARD, Some(header), None);
        assert_eq!(out.len(), 2);
        assert!(out[0].contains("'FOXBMS__BMS_H_'"));
        assert_eq!(out[1], "flagged");

        let ok = registry.run(
            RULE_GENERIC_MISSING_INCLUDE_GUARD,
            Some(header),
            Some("FOXBMS__BMS_H_"),
        );
        assert_eq!(ok, vec!["flagged".to_string()]);
    }

    #[test]
    fn domain_values_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleRegistry>();
        assert_send_sync::<MacroNameHook>();
        assert_send_sync::<crate::GuardFinding>();
        assert_send_sync::<crate::model::HeaderModel>();
        assert_send_sync::<crate::policy::EffectiveConfig>();
        assert_send_sync::<crate::report::DomainReport>();
    }

    #[test]
    fn unknown_rule_has_no_hooks() {
        let registry = RuleRegistry::with_defaults();
        assert!(registry.hooks("Generic-Unknown").is_empty());
        assert!(registry.run("Generic-Unknown", None, None).is_empty());
    }
}
