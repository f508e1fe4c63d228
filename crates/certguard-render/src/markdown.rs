use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Certguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Certificates: {}\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.profile,
        report.data.certificates_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
    } else {
        out.push_str("## Findings\n\n");

        for f in &report.findings {
            let sev = match f.severity {
                RenderableSeverity::Info => "INFO",
                RenderableSeverity::Warning => "WARN",
                RenderableSeverity::Error => "ERROR",
            };

            match &f.location {
                Some(loc) => out.push_str(&format!(
                    "- [{}] `{}` / `{}`: {} (`{}`)\n",
                    sev,
                    f.lint,
                    f.code,
                    f.message,
                    loc.label()
                )),
                None => out.push_str(&format!(
                    "- [{}] `{}` / `{}`: {}\n",
                    sev, f.lint, f.code, f.message
                )),
            }

            if let Some(help) = &f.help {
                out.push_str(&format!("  - help: {}\n", help));
            }
            if let Some(url) = &f.url {
                out.push_str(&format!("  - url: {}\n", url));
            }
        }
    }

    if !report.data.certificates.is_empty() {
        out.push_str("\n## Certificates\n\n");
        out.push_str("| Certificate | Subject | Results |\n|---|---|---|\n");
        for cert in &report.data.certificates {
            let results = cert
                .results
                .iter()
                .map(|(lint, status)| format!("`{lint}`: {status}"))
                .collect::<Vec<_>>()
                .join("<br>");
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                cert.location.label(),
                escape_cell(cert.subject.as_deref().unwrap_or("")),
                results
            ));
        }
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
