use certguard::model::{CertificateView, LoadedCertificate};
use certguard::types::{CertificateDocument, LintStatus, Location, Verdict, ids};
use certguard::{EffectiveConfig, EvPolicyTable, builtin_registry, evaluate};

fn load(path: &str, json: &str) -> LoadedCertificate {
    let doc: CertificateDocument = serde_json::from_str(json).expect("valid document");
    LoadedCertificate {
        location: Location::file(path),
        view: CertificateView::from(doc),
    }
}

#[test]
fn evaluate_through_the_facade() {
    let registry = builtin_registry(&EvPolicyTable::builtin()).expect("registry");
    let batch = vec![
        load(
            "ok.json",
            r#"{"role": "subscriber", "policy_identifiers": ["2.23.140.1.1"],
                "qualifier_id": [["1.3.6.1.5.5.7.2.1"]], "cps_uri": [["http://ca.example/cps"]]}"#,
        ),
        load(
            "bad.json",
            r#"{"role": "subscriber", "policy_identifiers": ["2.23.140.1.1"]}"#,
        ),
    ];

    let report = evaluate(&batch, &registry, &EffectiveConfig::default());

    assert_eq!(report.verdict, Verdict::Fail);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].code, ids::CODE_CPS_QUALIFIER_MISSING);
    assert_eq!(
        report.data.certificates[0].results[ids::LINT_EV_REQUIRES_CPS_URI],
        LintStatus::Pass
    );
}
