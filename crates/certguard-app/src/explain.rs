//! The `explain` use case: look up lint/code documentation.
//!
//! Explanations come from the static registry in `certguard-types`; the guideline citation,
//! source and effective window come from the registered lint, so `explain` and `list` agree.

use crate::list::{LintListing, run_list};
use certguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation, plus the metadata of the lint that reports it.
    Found {
        explanation: Explanation,
        lint: Option<LintListing>,
    },
    /// Unknown identifier; includes available lint names and codes.
    NotFound {
        identifier: String,
        available_lints: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a lint name or code.
pub fn run_explain(identifier: &str) -> anyhow::Result<ExplainOutput> {
    let Some(explanation) = explain::lookup_explanation(identifier) else {
        return Ok(ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_lints: explain::all_lint_names(),
            available_codes: explain::all_codes(),
        });
    };

    let lint = run_list()?
        .into_iter()
        .find(|listing| listing.name == explanation.lint);

    Ok(ExplainOutput::Found { explanation, lint })
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation, lint: Option<&LintListing>) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");

    match lint {
        Some(l) => {
            out.push_str(&format!("Lint:      {}\n", l.name));
            out.push_str(&format!("Citation:  {} ({})\n", l.citation, l.source));
            match &l.ineffective_date {
                Some(until) => out.push_str(&format!(
                    "Effective: certificates issued from {} until {}\n\n",
                    l.effective_date, until
                )),
                None => out.push_str(&format!(
                    "Effective: certificates issued on or after {}\n\n",
                    l.effective_date
                )),
            }
        }
        None => out.push_str(&format!("Lint:      {} (not registered)\n\n", exp.lint)),
    }

    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Certificate documents\n");
    out.push_str("---------------------\n\n");
    out.push_str("Failing:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("Passing:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, lints: &[&'static str], codes: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown lint or code: {}\n\n", identifier));
    out.push_str("Available lints:\n");
    for name in lints {
        out.push_str(&format!("  - {}\n", name));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}
