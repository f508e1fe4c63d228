use crate::fingerprint::fingerprint_for_certificate;
use crate::lint::{Lint, LintResult};
use crate::model::{CertificateView, LoadedCertificate};
use crate::policy::{EffectiveConfig, FailOn};
use crate::registry::Registry;
use crate::report::{DomainReport, SeverityCounts};
use certguard_types::{
    CertguardData, CertificateSummary, Finding, LintStatus, Severity, Verdict, ids,
};
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Run one lint against one certificate: effective window, then applicability, then execute.
pub fn run_lint(lint: &dyn Lint, cert: &CertificateView) -> LintResult {
    if !lint.metadata().is_effective_at(cert.not_before) {
        return LintResult::new(LintStatus::NotEffective);
    }
    if !lint.applies(cert) {
        return LintResult::new(LintStatus::NotApplicable);
    }
    lint.execute(cert)
}

/// Evaluate every enabled lint against a single certificate.
pub fn evaluate_certificate(
    cert: &LoadedCertificate,
    registry: &Registry,
    cfg: &EffectiveConfig,
) -> (CertificateSummary, Vec<Finding>) {
    let mut results = BTreeMap::new();
    let mut findings = Vec::new();

    for lint in registry.lints() {
        let meta = lint.metadata();
        if !cfg.lint_enabled(meta.name) {
            continue;
        }

        let result = run_lint(&**lint, &cert.view);
        results.insert(meta.name.to_string(), result.status);

        if let Some(severity) = result.status.finding_severity() {
            findings.push(to_finding(&**lint, cert, result, severity));
        }
    }

    let summary = CertificateSummary {
        location: cert.location.clone(),
        subject: cert.view.subject.clone(),
        results,
    };
    (summary, findings)
}

fn to_finding(
    lint: &dyn Lint,
    cert: &LoadedCertificate,
    result: LintResult,
    severity: Severity,
) -> Finding {
    let meta = lint.metadata();
    let code = result.code.unwrap_or(ids::CODE_LINT_FAILED);

    let mut data = match result.data {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("details".to_string(), other);
            map
        }
    };
    data.insert("status".into(), Value::from(result.status.as_str()));
    data.insert("citation".into(), Value::from(meta.citation));
    data.insert("source".into(), Value::from(meta.source.as_str()));
    if let Some(subject) = &cert.view.subject {
        data.insert("subject".into(), Value::from(subject.as_str()));
    }

    Finding {
        severity,
        lint: meta.name.to_string(),
        code: code.to_string(),
        message: result
            .details
            .unwrap_or_else(|| meta.description.to_string()),
        location: Some(cert.location.clone()),
        help: Some(format!(
            "{} ({}). Run `certguard explain {}` for remediation guidance.",
            meta.description, meta.citation, code
        )),
        url: None,
        fingerprint: Some(fingerprint_for_certificate(
            meta.name,
            code,
            &cert.location,
            cert.view.serial.as_deref(),
        )),
        data: Value::Object(data),
    }
}

pub fn evaluate(
    batch: &[LoadedCertificate],
    registry: &Registry,
    cfg: &EffectiveConfig,
) -> DomainReport {
    // Lints are stateless, so certificates can be linted independently.
    let evaluated: Vec<(CertificateSummary, Vec<Finding>)> = batch
        .par_iter()
        .map(|cert| evaluate_certificate(cert, registry, cfg))
        .collect();

    let mut certificates = Vec::with_capacity(evaluated.len());
    let mut findings: Vec<Finding> = Vec::new();
    for (summary, mut cert_findings) in evaluated {
        certificates.push(summary);
        findings.append(&mut cert_findings);
    }

    // Deterministic ordering before truncation.
    certificates.sort_by(|a, b| a.location.cmp(&b.location));
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let inputs: BTreeSet<&str> = batch.iter().map(|c| c.location.path.as_str()).collect();
    let lints_run = registry
        .lints()
        .iter()
        .filter(|l| cfg.lint_enabled(l.metadata().name))
        .count();

    let data = CertguardData {
        profile: cfg.profile.clone(),
        inputs_scanned: inputs.len() as u32,
        certificates_scanned: batch.len() as u32,
        lints_run: lints_run as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
        certificates,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.index (missing first)
    // 4) lint
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (ap, ai) = match &a.location {
        Some(l) => (l.path.as_str(), l.index),
        None => ("~", None),
    };
    let (bp, bi) = match &b.location {
        Some(l) => (l.path.as_str(), l.index),
        None => ("~", None),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(ai.cmp(&bi))
        .then(a.lint.cmp(&b.lint))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
