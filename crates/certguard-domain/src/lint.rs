//! The lint plugin contract.

use crate::model::CertificateView;
use certguard_types::LintStatus;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use time::{Date, OffsetDateTime};

/// Guideline or standard a lint enforces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintSource {
    Rfc5280,
    CabfBaselineRequirements,
    CabfEvGuidelines,
    MozillaRootStorePolicy,
    Community,
}

impl LintSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LintSource::Rfc5280 => "rfc5280",
            LintSource::CabfBaselineRequirements => "cabf_baseline_requirements",
            LintSource::CabfEvGuidelines => "cabf_ev_guidelines",
            LintSource::MozillaRootStorePolicy => "mozilla_root_store_policy",
            LintSource::Community => "community",
        }
    }
}

impl fmt::Display for LintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration metadata every lint carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub source: LintSource,
    /// Certificates issued before this date are not held to the lint.
    pub effective_date: Date,
    /// Certificates issued on or after this date are no longer held to the lint.
    pub ineffective_date: Option<Date>,
}

impl LintMetadata {
    /// Whether a certificate with the given `notBefore` falls inside the lint's window.
    ///
    /// A certificate without a known issuance time is always in scope.
    pub fn is_effective_at(&self, not_before: Option<OffsetDateTime>) -> bool {
        let Some(not_before) = not_before else {
            return true;
        };
        if not_before < self.effective_date.midnight().assume_utc() {
            return false;
        }
        match self.ineffective_date {
            Some(end) => not_before < end.midnight().assume_utc(),
            None => true,
        }
    }
}

/// What a single `execute` call concluded.
#[derive(Clone, Debug, PartialEq)]
pub struct LintResult {
    pub status: LintStatus,
    /// Stable finding code for non-passing results.
    pub code: Option<&'static str>,
    pub details: Option<String>,
    /// Lint-specific payload copied into the finding.
    pub data: JsonValue,
}

impl LintResult {
    pub fn new(status: LintStatus) -> Self {
        Self {
            status,
            code: None,
            details: None,
            data: JsonValue::Null,
        }
    }

    pub fn pass() -> Self {
        Self::new(LintStatus::Pass)
    }

    pub fn error(code: &'static str, details: impl Into<String>) -> Self {
        Self {
            status: LintStatus::Error,
            code: Some(code),
            details: Some(details.into()),
            data: JsonValue::Null,
        }
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = data;
        self
    }
}

/// A certificate lint.
///
/// Implementations are stateless with respect to the certificate: both methods take the view
/// by shared reference and may be called concurrently from many threads.
pub trait Lint: Send + Sync {
    fn metadata(&self) -> &LintMetadata;

    /// Whether the certificate is in scope for this lint. Must not fail.
    fn applies(&self, cert: &CertificateView) -> bool;

    /// Evaluate an in-scope certificate. Only called when `applies` returned true.
    fn execute(&self, cert: &CertificateView) -> LintResult;
}
