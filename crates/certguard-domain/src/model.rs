use certguard_types::{CertificateDocument, CertificateRole, Location, Oid};
use time::OffsetDateTime;

/// Read-only view of the certificate facts lints inspect.
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateView {
    pub subject: Option<String>,
    pub serial: Option<String>,
    pub not_before: Option<OffsetDateTime>,
    pub role: CertificateRole,

    /// Policy OIDs asserted in the Certificate Policies extension.
    pub policy_identifiers: Vec<Oid>,

    /// Policy qualifier IDs, one group per policy entry.
    pub qualifier_id: Vec<Vec<Oid>>,

    /// CPS URI qualifier values, one group per policy entry.
    pub cps_uri: Vec<Vec<String>>,
}

impl CertificateView {
    /// End-entity certificate, as opposed to a root or intermediate CA.
    pub fn is_subscriber(&self) -> bool {
        self.role == CertificateRole::Subscriber
    }
}

impl From<CertificateDocument> for CertificateView {
    fn from(doc: CertificateDocument) -> Self {
        Self {
            subject: doc.subject,
            serial: doc.serial,
            not_before: doc.not_before,
            role: doc.role,
            policy_identifiers: doc.policy_identifiers,
            qualifier_id: doc.qualifier_id,
            cps_uri: doc.cps_uri,
        }
    }
}

/// A certificate together with where it was loaded from.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedCertificate {
    pub location: Location,
    pub view: CertificateView,
}
