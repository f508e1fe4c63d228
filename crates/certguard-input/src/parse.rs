use anyhow::Context;
use certguard_domain::model::{CertificateView, LoadedCertificate};
use certguard_types::{CertificateDocument, Location};
use serde_json::Value;

/// Decode one input file: a single document object, or an array of documents.
///
/// `Location::index` is only set for arrays so single-document findings point at the file.
pub fn parse_documents(path: &str, text: &str) -> anyhow::Result<Vec<LoadedCertificate>> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let index = u32::try_from(i).context("too many documents in one file")?;
                let doc: CertificateDocument = serde_json::from_value(item)
                    .with_context(|| format!("invalid certificate document at index {i}"))?;
                Ok(LoadedCertificate {
                    location: Location::indexed(path, index),
                    view: CertificateView::from(doc),
                })
            })
            .collect(),
        Value::Object(_) => {
            let doc: CertificateDocument =
                serde_json::from_value(value).context("invalid certificate document")?;
            Ok(vec![LoadedCertificate {
                location: Location::file(path),
                view: CertificateView::from(doc),
            }])
        }
        _ => anyhow::bail!("expected a certificate document object or an array of documents"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certguard_types::Oid;

    #[test]
    fn single_object_has_no_index() {
        let certs = parse_documents(
            "ev.json",
            r#"{
                "role": "subscriber",
                "policy_identifiers": ["2.23.140.1.1"],
                "qualifier_id": [["1.3.6.1.5.5.7.2.1"]],
                "cps_uri": [["https://ca.example/cps"]]
            }"#,
        )
        .expect("parse");
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].location, Location::file("ev.json"));
        assert_eq!(certs[0].view.qualifier_id[0][0], Oid::id_qt_cps());
    }

    #[test]
    fn arrays_are_indexed() {
        let certs = parse_documents("batch.json", r#"[{"role": "root"}, {"role": "subscriber"}]"#)
            .expect("parse");
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[1].location, Location::indexed("batch.json", 1));
    }

    #[test]
    fn empty_array_yields_no_certificates() {
        assert!(parse_documents("empty.json", "[]").expect("parse").is_empty());
    }

    #[test]
    fn bad_element_reports_its_index() {
        let err = parse_documents(
            "batch.json",
            r#"[{"role": "subscriber"}, {"role": "subscriber", "policy_identifiers": ["x"]}]"#,
        )
        .expect_err("bad oid");
        assert!(format!("{err:#}").contains("index 1"));
    }

    #[test]
    fn uuid_policy_oids_do_not_reject_the_document() {
        let certs = parse_documents(
            "ev.json",
            r#"{
                "role": "subscriber",
                "policy_identifiers": [
                    "2.23.140.1.1",
                    "2.25.329800735698586629295641978511506172918"
                ],
                "qualifier_id": [["1.3.6.1.5.5.7.2.1"]],
                "cps_uri": [["https://ca.example/cps"]]
            }"#,
        )
        .expect("parse");
        assert_eq!(certs.len(), 1);
        assert_eq!(
            certs[0].view.policy_identifiers[1].to_string(),
            "2.25.329800735698586629295641978511506172918"
        );
    }

    #[test]
    fn scalars_are_rejected() {
        assert!(parse_documents("n.json", "42").is_err());
        assert!(parse_documents("s.json", "\"cert\"").is_err());
    }
}
