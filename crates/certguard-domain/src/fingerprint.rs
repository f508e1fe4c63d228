use certguard_types::Location;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a certificate finding.
///
/// Identity fields:
/// - lint name
/// - code
/// - input path and document index (if present)
/// - certificate serial (if present)
pub fn fingerprint_for_certificate(
    lint: &str,
    code: &str,
    location: &Location,
    serial: Option<&str>,
) -> String {
    let index = location.index.map(|i| i.to_string());
    let mut parts = vec![lint, code, location.path.as_str()];
    if let Some(i) = index.as_deref() {
        parts.push(i);
    }
    if let Some(s) = serial {
        parts.push(s);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_sensitive_to_identity_fields() {
        let loc = Location::file("certs/a.json");
        let a = fingerprint_for_certificate("lint", "code", &loc, Some("01"));
        let b = fingerprint_for_certificate("lint", "code", &loc, Some("01"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);

        let other_serial = fingerprint_for_certificate("lint", "code", &loc, Some("02"));
        assert_ne!(a, other_serial);

        let other_index =
            fingerprint_for_certificate("lint", "code", &Location::indexed("certs/a.json", 0), Some("01"));
        assert_ne!(a, other_index);
    }
}
