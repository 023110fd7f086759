use crate::{RenderableReport, RenderableSeverity, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Incguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Headers scanned: {}\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.headers_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        match &f.location {
            Some(loc) => match loc.line {
                Some(line) => out.push_str(&format!(
                    "- [{}] `{}` / `{}`: {} (`{}`:{})\n",
                    sev, f.check_id, f.code, f.message, loc.path, line
                )),
                None => out.push_str(&format!(
                    "- [{}] `{}` / `{}`: {} (`{}`)\n",
                    sev, f.check_id, f.code, f.message, loc.path
                )),
            },
            None => out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}\n",
                sev, f.check_id, f.code, f.message
            )),
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableLocation};

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            findings: Vec::new(),
            data: RenderableData {
                headers_scanned: 4,
                findings_emitted: 0,
                findings_total: 0,
                truncated_reason: None,
            },
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Headers scanned: 4"));
        assert!(md.contains("No findings"));
    }

    #[test]
    fn renders_findings_with_location_help_url_and_truncation() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: "headers.include_guard".to_string(),
                code: "missing_include_guard".to_string(),
                message: "Expected include guard is 'FOXBMS__BMS_H_', but found <none>."
                    .to_string(),
                location: Some(RenderableLocation {
                    path: "src/app/bms.h".to_string(),
                    line: Some(7),
                    col: None,
                }),
                help: Some("add the guard".to_string()),
                url: Some("https://example.com/docs".to_string()),
            }],
            data: RenderableData {
                headers_scanned: 2,
                findings_emitted: 1,
                findings_total: 2,
                truncated_reason: Some("truncated".to_string()),
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("> Note: truncated"));
        assert!(md.contains("## Findings"));
        assert!(md.contains("[ERROR]"));
        assert!(md.contains("`src/app/bms.h`:7"));
        assert!(md.contains("but found <none>."));
        assert!(md.contains("help: add the guard"));
        assert!(md.contains("url: https://example.com/docs"));
    }

    #[test]
    fn renders_location_without_line() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Warn,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Warning,
                check_id: "headers.include_guard".to_string(),
                code: "include_guard_mismatch".to_string(),
                message: "mismatch".to_string(),
                location: Some(RenderableLocation {
                    path: "src/can.h".to_string(),
                    line: None,
                    col: None,
                }),
                help: None,
                url: None,
            }],
            data: RenderableData {
                headers_scanned: 1,
                findings_emitted: 1,
                findings_total: 1,
                truncated_reason: None,
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("[WARN] `headers.include_guard` / `include_guard_mismatch`: mismatch (`src/can.h`)\n"));
    }
}
