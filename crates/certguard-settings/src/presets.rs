use certguard_domain::policy::{EffectiveConfig, FailOn};

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into `certguard.toml`.
pub fn preset(profile: &str) -> anyhow::Result<EffectiveConfig> {
    match profile {
        "strict" => Ok(strict_profile()),
        "pedantic" => Ok(pedantic_profile()),
        other => anyhow::bail!("unknown profile: {other} (expected strict|pedantic)"),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        ..EffectiveConfig::default()
    }
}

// Same lint set; warnings fail the run too.
fn pedantic_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "pedantic".to_string(),
        fail_on: FailOn::Warning,
        ..EffectiveConfig::default()
    }
}
