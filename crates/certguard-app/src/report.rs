use anyhow::Context;
use certguard_render::{
    RenderableCertificate, RenderableData, RenderableFinding, RenderableLocation,
    RenderableReport, RenderableSeverity, RenderableVerdictStatus,
};
use certguard_types::{
    CertguardData, CertguardReport, Finding, Location, SCHEMA_REPORT_V1, Severity, ToolMeta,
    Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<CertguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse certguard report")
}

pub fn serialize_report(report: &CertguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &CertguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            certificates_scanned: report.data.certificates_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
            certificates: report
                .data
                .certificates
                .iter()
                .map(|c| RenderableCertificate {
                    location: renderable_location(&c.location),
                    subject: c.subject.clone(),
                    results: c
                        .results
                        .iter()
                        .map(|(lint, status)| (lint.clone(), status.as_str().to_string()))
                        .collect(),
                })
                .collect(),
        },
    }
}

fn renderable_location(loc: &Location) -> RenderableLocation {
    RenderableLocation {
        path: loc.path.clone(),
        index: loc.index,
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        lint: f.lint.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(renderable_location),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

/// Report written when the tool itself failed (bad config, unreadable input).
pub fn runtime_error_report(message: &str) -> CertguardReport {
    let now = OffsetDateTime::now_utc();
    CertguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "certguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            lint: ids::LINT_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run certguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: CertguardData {
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..CertguardData::default()
        },
    }
}
