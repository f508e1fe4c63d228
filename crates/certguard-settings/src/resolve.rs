use crate::{model::CertguardConfigV1, presets};
use anyhow::Context;
use certguard_domain::policy::{EffectiveConfig, FailOn, LintPolicy};
use certguard_types::Oid;
use globset::{Glob, GlobSet, GlobSetBuilder};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: CertguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile)?;

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    effective.include = build_globset("include", &cfg.include)?;
    effective.exclude = build_globset("exclude", &cfg.exclude)?;

    for (name, lc) in cfg.lints.iter() {
        if let Some(enabled) = lc.enabled {
            let policy = if enabled {
                LintPolicy::enabled()
            } else {
                LintPolicy::disabled()
            };
            effective.lints.insert(name.clone(), policy);
        }
    }

    effective.ev_policy_oids = cfg
        .ev_policy_oids
        .iter()
        .map(|s| {
            s.parse::<Oid>()
                .with_context(|| format!("invalid ev_policy_oids entry: {s}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn build_globset(field: &str, patterns: &[String]) -> anyhow::Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("invalid {field} glob: {pattern}"))?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .with_context(|| format!("failed to build {field} globs"))?;
    Ok(Some(set))
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
