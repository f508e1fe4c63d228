//! Input adapters: discover certificate documents and load them into domain views.
//!
//! This crate is allowed to do filesystem IO. Certificates arrive pre-decoded as JSON
//! documents; DER/PEM decoding happens upstream.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use certguard_domain::model::LoadedCertificate;
use rayon::prelude::*;

pub use discover::discover_inputs;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a certificate document file (one object or an array).
    ///
    /// Returns the number of documents on success. **Never panics** on any input.
    pub fn parse_documents(text: &str) -> anyhow::Result<usize> {
        let certs = super::parse::parse_documents("fuzz.json", text)?;
        Ok(certs.len())
    }

    /// Parse arbitrary text as a dotted object identifier.
    ///
    /// **Never panics** on any input.
    pub fn parse_oid(text: &str) -> anyhow::Result<String> {
        let oid: certguard_types::Oid = text.parse()?;
        Ok(oid.to_string())
    }
}

/// Read and decode every input file.
///
/// Files are read in parallel; the result keeps the order of `files`, and within a file
/// the order of the documents it holds.
pub fn load_certificates(files: &[Utf8PathBuf]) -> anyhow::Result<Vec<LoadedCertificate>> {
    let per_file = files
        .par_iter()
        .map(|path| load_file(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let certs: Vec<LoadedCertificate> = per_file.into_iter().flatten().collect();
    tracing::debug!(
        files = files.len(),
        certificates = certs.len(),
        "loaded certificate documents"
    );
    Ok(certs)
}

fn load_file(path: &Utf8Path) -> anyhow::Result<Vec<LoadedCertificate>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    let display = path.as_str().replace('\\', "/");
    parse::parse_documents(&display, &text).with_context(|| format!("parse {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use certguard_types::CertificateRole;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn load_certificates_preserves_file_then_document_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(
            &root.join("a.json"),
            r#"[{"subject": "CN=a0", "role": "subscriber"}, {"subject": "CN=a1", "role": "root"}]"#,
        );
        write_file(
            &root.join("b.json"),
            r#"{"subject": "CN=b", "role": "intermediate"}"#,
        );

        let files = discover_inputs(&[root.clone()]).expect("discover");
        let certs = load_certificates(&files).expect("load");

        let subjects: Vec<_> = certs
            .iter()
            .map(|c| c.view.subject.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(subjects, vec!["CN=a0", "CN=a1", "CN=b"]);
        assert_eq!(certs[0].location.index, Some(0));
        assert_eq!(certs[1].location.index, Some(1));
        assert_eq!(certs[1].view.role, CertificateRole::Root);
        assert_eq!(certs[2].location.index, None);
        assert!(certs[2].location.path.ends_with("b.json"));
    }

    #[test]
    fn load_errors_name_the_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let bad = root.join("bad.json");
        write_file(&bad, "{ not json");

        let err = load_certificates(&[bad]).expect_err("invalid json");
        assert!(format!("{err:#}").contains("bad.json"));
    }

    proptest! {
        #[test]
        fn fuzz_parsers_never_panic(input in ".*") {
            let _ = fuzz::parse_documents(&input);
            let _ = fuzz::parse_oid(&input);
        }
    }
}
