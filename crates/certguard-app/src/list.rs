//! The `list` use case: describe the registered lints.

use anyhow::Context;
use certguard_domain::classify::EvPolicyTable;
use serde::Serialize;

/// Registration metadata of one lint, as shown by `certguard list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LintListing {
    pub name: String,
    pub description: String,
    pub citation: String,
    pub source: String,
    pub effective_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ineffective_date: Option<String>,
}

/// List the built-in lints in registry (name) order.
pub fn run_list() -> anyhow::Result<Vec<LintListing>> {
    let registry = certguard_domain::builtin_registry(&EvPolicyTable::builtin())
        .context("build lint registry")?;

    Ok(registry
        .metadata()
        .into_iter()
        .map(|meta| LintListing {
            name: meta.name.to_string(),
            description: meta.description.to_string(),
            citation: meta.citation.to_string(),
            source: meta.source.to_string(),
            effective_date: meta.effective_date.to_string(),
            ineffective_date: meta.ineffective_date.map(|d| d.to_string()),
        })
        .collect())
}

/// Format the listing for terminal display.
pub fn format_list(lints: &[LintListing]) -> String {
    let mut out = String::new();
    for l in lints {
        out.push_str(&format!("{}\n", l.name));
        out.push_str(&format!("  {}\n", l.description));
        out.push_str(&format!(
            "  source: {} ({}), effective {}",
            l.source, l.citation, l.effective_date
        ));
        if let Some(until) = &l.ineffective_date {
            out.push_str(&format!(" until {until}"));
        }
        out.push('\n');
    }
    out
}
