use crate::classify::EvPolicyTable;
use crate::dates::EVG_1_2_DATE;
use crate::lint::{Lint, LintMetadata, LintResult, LintSource};
use crate::model::CertificateView;
use certguard_types::{Oid, ids};
use serde_json::json;

const HTTP_PREFIXES: [&str; 2] = ["http://", "https://"];

const METADATA: LintMetadata = LintMetadata {
    name: ids::LINT_EV_REQUIRES_CPS_URI,
    description: "EV TLS certificates MUST include an HTTP accessible CPS URI Policy Qualifier",
    citation: "EVG 9.7 (3)",
    source: LintSource::CabfEvGuidelines,
    effective_date: EVG_1_2_DATE,
    ineffective_date: None,
};

/// EV subscriber certificates must carry an `id-qt-cps` qualifier and an HTTP(S) CPS URI.
///
/// The qualifier and the URI are looked up independently across all policy entries; they do
/// not have to belong to the same entry.
#[derive(Clone, Debug)]
pub struct EvRequiresCpsUri {
    metadata: LintMetadata,
    ev_policies: EvPolicyTable,
    cps_oid: Oid,
}

impl EvRequiresCpsUri {
    pub fn new(ev_policies: EvPolicyTable) -> Self {
        Self {
            metadata: METADATA,
            ev_policies,
            cps_oid: Oid::id_qt_cps(),
        }
    }

    fn has_cps_oid(&self, cert: &CertificateView) -> bool {
        cert.qualifier_id
            .iter()
            .flatten()
            .any(|qualifier| *qualifier == self.cps_oid)
    }
}

impl Default for EvRequiresCpsUri {
    fn default() -> Self {
        Self::new(EvPolicyTable::builtin())
    }
}

fn has_http_cps_uri(cert: &CertificateView) -> bool {
    cert.cps_uri
        .iter()
        .flatten()
        .any(|uri| HTTP_PREFIXES.iter().any(|prefix| uri.starts_with(*prefix)))
}

impl Lint for EvRequiresCpsUri {
    fn metadata(&self) -> &LintMetadata {
        &self.metadata
    }

    fn applies(&self, cert: &CertificateView) -> bool {
        self.ev_policies.is_ev(&cert.policy_identifiers) && cert.is_subscriber()
    }

    fn execute(&self, cert: &CertificateView) -> LintResult {
        let has_cps_oid = self.has_cps_oid(cert);
        let has_http_cps_uri = has_http_cps_uri(cert);

        let data = json!({
            "has_cps_oid": has_cps_oid,
            "has_http_cps_uri": has_http_cps_uri,
        });

        match (has_cps_oid, has_http_cps_uri) {
            (true, true) => LintResult::pass(),
            (false, _) => LintResult::error(
                ids::CODE_CPS_QUALIFIER_MISSING,
                "EV certificate has no id-qt-cps policy qualifier",
            )
            .with_data(data),
            (true, false) => LintResult::error(
                ids::CODE_HTTP_CPS_URI_MISSING,
                "EV certificate has no CPS URI starting with http:// or https://",
            )
            .with_data(data),
        }
    }
}
