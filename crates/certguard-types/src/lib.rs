//! Stable DTOs and IDs used across the certguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report and the consumed certificate documents
//! - stable string IDs and codes
//! - object identifiers with arc-wise equality
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod cert;
pub mod explain;
pub mod ids;
pub mod oid;
pub mod receipt;

pub use cert::{CertificateDocument, CertificateRole};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use oid::{Oid, OidParseError};
pub use receipt::{
    CertguardData, CertguardReport, CertificateSummary, Finding, LintStatus, Location,
    ReportEnvelope, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict,
};
