//! Explain registry for lints and codes.
//!
//! Maps lint names and finding codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a lint or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Lint that reports this identifier (the lint itself for lint names).
    pub lint: &'static str,
    /// Short description of the lint/code.
    pub title: &'static str,
    /// What the lint checks and the guideline clause it enforces.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after certificate document examples.
    pub examples: ExamplePair,
}

/// Before and after certificate document examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Document that would trigger a finding.
    pub before: &'static str,
    /// Document that passes the lint.
    pub after: &'static str,
}

/// Look up an explanation by lint name or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Lints
        ids::LINT_EV_REQUIRES_CPS_URI => Some(explain_ev_requires_cps_uri()),

        // Codes
        ids::CODE_CPS_QUALIFIER_MISSING => Some(explain_cps_qualifier_missing()),
        ids::CODE_HTTP_CPS_URI_MISSING => Some(explain_http_cps_uri_missing()),

        _ => None,
    }
}

/// List all known lint names.
pub fn all_lint_names() -> &'static [&'static str] {
    &[ids::LINT_EV_REQUIRES_CPS_URI]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_CPS_QUALIFIER_MISSING, ids::CODE_HTTP_CPS_URI_MISSING]
}

const EV_FAILING_EXAMPLE: &str = r#"{
  "role": "subscriber",
  "policy_identifiers": ["2.23.140.1.1"],
  "qualifier_id": [["1.3.6.1.5.5.7.2.2"]],
  "cps_uri": []
}"#;

const EV_PASSING_EXAMPLE: &str = r#"{
  "role": "subscriber",
  "policy_identifiers": ["2.23.140.1.1"],
  "qualifier_id": [["1.3.6.1.5.5.7.2.1"]],
  "cps_uri": [["https://ca.example/cps"]]
}"#;

// --- Lint-level explanations ---

fn explain_ev_requires_cps_uri() -> Explanation {
    Explanation {
        lint: ids::LINT_EV_REQUIRES_CPS_URI,
        title: "EV Certificates Require an HTTP CPS URI",
        description: "\
EV TLS subscriber certificates MUST include an HTTP accessible CPS URI policy
qualifier (EV Guidelines 9.7 (3)).

The lint applies to end-entity certificates asserting at least one recognized EV
policy OID. It passes only when both hold:
- some Certificate Policies entry carries the id-qt-cps qualifier (1.3.6.1.5.5.7.2.1)
- some CPS URI starts with `http://` or `https://` (lowercase scheme)

The two conditions are checked independently: the URI does not have to sit in the
same policy entry as the qualifier OID.",
        remediation: "\
Add a CPS pointer qualifier to the EV policy entry of the Certificate Policies
extension, with a URI that relying parties can fetch over HTTP or HTTPS:

    policyQualifierId = id-qt-cps
    qualifier         = https://ca.example/cps",
        examples: ExamplePair {
            before: EV_FAILING_EXAMPLE,
            after: EV_PASSING_EXAMPLE,
        },
    }
}

// --- Code-level explanations ---

fn explain_cps_qualifier_missing() -> Explanation {
    Explanation {
        lint: ids::LINT_EV_REQUIRES_CPS_URI,
        title: "CPS Qualifier Missing",
        description: "\
None of the Certificate Policies entries carries the id-qt-cps policy qualifier
(1.3.6.1.5.5.7.2.1). EV certificates must point relying parties at the CA's
Certification Practice Statement.",
        remediation: "\
Add a PolicyQualifierInfo with policyQualifierId id-qt-cps to the EV policy entry.",
        examples: ExamplePair {
            before: EV_FAILING_EXAMPLE,
            after: EV_PASSING_EXAMPLE,
        },
    }
}

fn explain_http_cps_uri_missing() -> Explanation {
    Explanation {
        lint: ids::LINT_EV_REQUIRES_CPS_URI,
        title: "HTTP CPS URI Missing",
        description: "\
The certificate names the id-qt-cps qualifier but no CPS URI starts with
`http://` or `https://`. Other schemes (ftp, ldap) and uppercase schemes such as
`HTTP://` do not count.",
        remediation: "\
Publish the CPS at an http:// or https:// location and encode that URI as the
qualifier value.",
        examples: ExamplePair {
            before: r#"{
  "role": "subscriber",
  "policy_identifiers": ["2.23.140.1.1"],
  "qualifier_id": [["1.3.6.1.5.5.7.2.1"]],
  "cps_uri": [["ftp://ca.example/cps"]]
}"#,
            after: EV_PASSING_EXAMPLE,
        },
    }
}
