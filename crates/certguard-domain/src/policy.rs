use certguard_types::Oid;
use globset::GlobSet;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintPolicy {
    pub enabled: bool,
}

impl LintPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,

    /// Lint-name globs to run. `None` runs every registered lint.
    pub include: Option<GlobSet>,
    /// Lint-name globs to skip.
    pub exclude: Option<GlobSet>,

    /// Explicit per-lint settings; these win over include/exclude.
    pub lints: BTreeMap<String, LintPolicy>,

    /// Extra EV policy OIDs on top of the built-in table.
    pub ev_policy_oids: Vec<Oid>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "strict".to_string(),
            fail_on: FailOn::Error,
            max_findings: 200,
            include: None,
            exclude: None,
            lints: BTreeMap::new(),
            ev_policy_oids: Vec::new(),
        }
    }
}

impl EffectiveConfig {
    pub fn lint_enabled(&self, name: &str) -> bool {
        if let Some(policy) = self.lints.get(name) {
            return policy.enabled;
        }
        let included = self
            .include
            .as_ref()
            .map(|set| set.is_match(name))
            .unwrap_or(true);
        let excluded = self
            .exclude
            .as_ref()
            .map(|set| set.is_match(name))
            .unwrap_or(false);
        included && !excluded
    }
}
