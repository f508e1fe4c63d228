//! The `lint` use case: load certificates, evaluate the registry, and produce a report.

use anyhow::Context;
use camino::Utf8PathBuf;
use certguard_domain::classify::EvPolicyTable;
use certguard_settings::{CertguardConfigV1, Overrides, ResolvedConfig};
use certguard_types::{CertguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the lint use case.
#[derive(Clone, Debug)]
pub struct LintInput<'a> {
    /// Files and directories holding certificate documents.
    pub inputs: &'a [Utf8PathBuf],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the lint use case.
#[derive(Clone, Debug)]
pub struct LintOutput {
    /// The generated report.
    pub report: CertguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the lint use case: parse config, build the registry, load inputs, evaluate, report.
pub fn run_lint(input: LintInput<'_>) -> anyhow::Result<LintOutput> {
    let _span = tracing::info_span!("lint", inputs = input.inputs.len()).entered();
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        CertguardConfigV1::default()
    } else {
        certguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        certguard_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;
    tracing::debug!(
        profile = %resolved.effective.profile,
        max_findings = resolved.effective.max_findings,
        "resolved config"
    );

    let ev_policies = EvPolicyTable::with_extra(resolved.effective.ev_policy_oids.iter().cloned());
    let registry =
        certguard_domain::builtin_registry(&ev_policies).context("build lint registry")?;

    let files = certguard_input::discover_inputs(input.inputs).context("discover inputs")?;
    if files.is_empty() {
        tracing::warn!("no certificate documents found");
    }
    let certs = certguard_input::load_certificates(&files).context("load certificates")?;

    let certguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        counts,
    } = certguard_domain::evaluate(&certs, &registry, &resolved.effective);

    tracing::info!(
        certificates = data.certificates_scanned,
        errors = counts.error,
        warnings = counts.warning,
        notices = counts.info,
        verdict = ?verdict,
        "evaluation finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "certguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(LintOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
