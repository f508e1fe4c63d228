//! Fuzz target for the EV CPS URI lint.
//!
//! Goal: for any qualifier/URI grouping the lint passes exactly when some qualifier is
//! id-qt-cps and some URI starts with `http://` or `https://`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ev_cps_uri
//! ```

#![no_main]

use arbitrary::Arbitrary;
use certguard::model::CertificateView;
use certguard::types::{CertificateRole, LintStatus, Oid};
use certguard::{EvPolicyTable, Lint, checks::EvRequiresCpsUri};
use libfuzzer_sys::fuzz_target;

/// Structured input: qualifier arcs and URIs grouped per policy entry.
#[derive(Arbitrary, Debug)]
struct CertInput {
    qualifier_arcs: Vec<Vec<Vec<u8>>>,
    cps_uri: Vec<Vec<String>>,
}

fuzz_target!(|input: CertInput| {
    if input.qualifier_arcs.len() > 16 || input.cps_uri.len() > 16 {
        return;
    }

    // Small arcs keep id-qt-cps (1.3.6.1.5.5.7.2.1) reachable.
    let qualifier_id: Vec<Vec<Oid>> = input
        .qualifier_arcs
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|arcs| Oid::from_arcs(&arcs.iter().map(|a| u64::from(*a % 10)).collect::<Vec<_>>()))
                .collect()
        })
        .collect();

    let cert = CertificateView {
        subject: None,
        serial: None,
        not_before: None,
        role: CertificateRole::Subscriber,
        policy_identifiers: vec![Oid::from_arcs(&[2, 23, 140, 1, 1])],
        qualifier_id,
        cps_uri: input.cps_uri,
    };

    let lint = EvRequiresCpsUri::new(EvPolicyTable::builtin());
    assert!(lint.applies(&cert));

    let has_oid = cert.qualifier_id.iter().flatten().any(|o| *o == Oid::id_qt_cps());
    let has_uri = cert
        .cps_uri
        .iter()
        .flatten()
        .any(|u| u.starts_with("http://") || u.starts_with("https://"));
    let expected = if has_oid && has_uri {
        LintStatus::Pass
    } else {
        LintStatus::Error
    };
    assert_eq!(lint.execute(&cert).status, expected);
});
