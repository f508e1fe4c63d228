use crate::Oid;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Role of a certificate in its chain, as classified by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CertificateRole {
    /// End-entity certificate.
    Subscriber,
    Intermediate,
    Root,
}

/// Pre-decoded certificate facts consumed by certguard.
///
/// Producing this document (DER/PEM decoding, chain classification) happens upstream.
/// `qualifier_id` and `cps_uri` are grouped per Certificate Policies entry, in extension order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CertificateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub not_before: Option<OffsetDateTime>,

    pub role: CertificateRole,

    #[schemars(with = "Vec<String>")]
    #[serde(default)]
    pub policy_identifiers: Vec<Oid>,

    #[schemars(with = "Vec<Vec<String>>")]
    #[serde(default)]
    pub qualifier_id: Vec<Vec<Oid>>,

    #[serde(default)]
    pub cps_uri: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_defaults_collections() {
        let doc: CertificateDocument =
            serde_json::from_str(r#"{ "role": "subscriber" }"#).expect("parse");
        assert_eq!(doc.role, CertificateRole::Subscriber);
        assert!(doc.policy_identifiers.is_empty());
        assert!(doc.qualifier_id.is_empty());
        assert!(doc.cps_uri.is_empty());
        assert!(doc.not_before.is_none());
    }

    #[test]
    fn full_document_parses() {
        let doc: CertificateDocument = serde_json::from_str(
            r#"{
                "subject": "CN=shop.example",
                "serial": "0a1b",
                "not_before": "2024-03-01T00:00:00Z",
                "role": "subscriber",
                "policy_identifiers": ["2.23.140.1.1"],
                "qualifier_id": [["1.3.6.1.5.5.7.2.1"]],
                "cps_uri": [["https://ca.example/cps"]]
            }"#,
        )
        .expect("parse");
        assert_eq!(doc.qualifier_id[0][0], Oid::id_qt_cps());
        assert_eq!(doc.cps_uri[0][0], "https://ca.example/cps");
        assert_eq!(doc.not_before.map(|t| t.year()), Some(2024));
    }

    #[test]
    fn invalid_oid_and_unknown_fields_are_rejected() {
        assert!(
            serde_json::from_str::<CertificateDocument>(
                r#"{ "role": "root", "policy_identifiers": ["9.9"] }"#
            )
            .is_err()
        );
        assert!(
            serde_json::from_str::<CertificateDocument>(r#"{ "role": "root", "extra": 1 }"#)
                .is_err()
        );
    }
}
