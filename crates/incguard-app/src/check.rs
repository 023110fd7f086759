//! The `check` use case: evaluate policy and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use incguard_settings::{Overrides, ResolvedConfig};
use incguard_types::{IncguardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Header scan written by the host analyzer.
    pub scan_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: IncguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, read the header scan, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        incguard_settings::IncguardConfigV1::default()
    } else {
        incguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = incguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let model = incguard_scan::read_scan_file(input.scan_path).context("read header scan")?;

    let domain_report = incguard_domain::evaluate(&model, &resolved.effective);
    tracing::info!(
        profile = %resolved.effective.profile,
        headers = domain_report.data.headers_scanned,
        findings = domain_report.data.findings_total,
        verdict = ?domain_report.verdict,
        "include guard check finished"
    );

    let finished_at = OffsetDateTime::now_utc();

    let report = IncguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "incguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
