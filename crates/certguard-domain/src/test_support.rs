use crate::lint::{Lint, LintMetadata, LintResult, LintSource};
use crate::model::{CertificateView, LoadedCertificate};
use crate::registry::Registry;
use certguard_types::{CertificateRole, LintStatus, Location, Oid};
use time::macros::date;
use time::{Date, Month};

/// Fixed lints are effective for any issuance date.
const ALWAYS_EFFECTIVE: Date = date!(0001 - 01 - 01);

pub const EV_OID: &str = "2.23.140.1.1";
pub const OV_OID: &str = "2.23.140.1.2.2";
pub const CPS_OID: &str = "1.3.6.1.5.5.7.2.1";
pub const UNOTICE_OID: &str = "1.3.6.1.5.5.7.2.2";

/// Lint with a canned outcome, for exercising the engine and registry.
pub struct FixedLint {
    metadata: LintMetadata,
    status: LintStatus,
    applies: bool,
}

impl FixedLint {
    pub fn new(name: &'static str, status: LintStatus) -> Self {
        Self {
            metadata: LintMetadata {
                name,
                description: "fixed outcome",
                citation: "test",
                source: LintSource::Community,
                effective_date: ALWAYS_EFFECTIVE,
                ineffective_date: None,
            },
            status,
            applies: true,
        }
    }

    pub fn effective_from(mut self, year: i32, month: u8, day: u8) -> Self {
        let month = Month::try_from(month).expect("valid month");
        self.metadata.effective_date =
            Date::from_calendar_date(year, month, day).expect("valid date");
        self
    }

    pub fn applies_when(mut self, applies: bool) -> Self {
        self.applies = applies;
        self
    }
}

impl Lint for FixedLint {
    fn metadata(&self) -> &LintMetadata {
        &self.metadata
    }

    fn applies(&self, _cert: &CertificateView) -> bool {
        self.applies
    }

    fn execute(&self, _cert: &CertificateView) -> LintResult {
        LintResult::new(self.status)
    }
}

pub fn registry_with(lints: Vec<FixedLint>) -> Registry {
    let mut registry = Registry::new();
    for lint in lints {
        registry.register(Box::new(lint)).expect("register lint");
    }
    registry
}

pub fn oid(s: &str) -> Oid {
    s.parse().expect("valid oid")
}

pub fn oids(values: &[&str]) -> Vec<Oid> {
    values.iter().map(|s| oid(s)).collect()
}

pub fn subscriber_view() -> CertificateView {
    CertificateView {
        subject: None,
        serial: None,
        not_before: None,
        role: CertificateRole::Subscriber,
        policy_identifiers: Vec::new(),
        qualifier_id: Vec::new(),
        cps_uri: Vec::new(),
    }
}

/// EV subscriber certificate with the given qualifier and URI groups.
pub fn ev_view(qualifier_id: &[&[&str]], cps_uri: &[&[&str]]) -> CertificateView {
    CertificateView {
        policy_identifiers: oids(&[EV_OID]),
        qualifier_id: qualifier_id.iter().map(|group| oids(group)).collect(),
        cps_uri: cps_uri
            .iter()
            .map(|group| group.iter().map(|s| s.to_string()).collect())
            .collect(),
        ..subscriber_view()
    }
}

pub fn loaded(path: &str, index: Option<u32>, view: CertificateView) -> LoadedCertificate {
    LoadedCertificate {
        location: Location {
            path: path.to_string(),
            index,
        },
        view,
    }
}
