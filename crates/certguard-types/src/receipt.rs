use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for certguard reports.
pub const SCHEMA_REPORT_V1: &str = "certguard.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Outcome of running one lint against one certificate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LintStatus {
    /// The certificate is outside the lint's scope.
    NotApplicable,
    /// The certificate predates (or outlives) the lint's effective window.
    NotEffective,
    Pass,
    Notice,
    Warn,
    Error,
    Fatal,
}

impl LintStatus {
    /// Severity of the finding this status produces, if any.
    pub fn finding_severity(self) -> Option<Severity> {
        match self {
            LintStatus::NotApplicable | LintStatus::NotEffective | LintStatus::Pass => None,
            LintStatus::Notice => Some(Severity::Info),
            LintStatus::Warn => Some(Severity::Warning),
            LintStatus::Error | LintStatus::Fatal => Some(Severity::Error),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LintStatus::NotApplicable => "not_applicable",
            LintStatus::NotEffective => "not_effective",
            LintStatus::Pass => "pass",
            LintStatus::Notice => "notice",
            LintStatus::Warn => "warn",
            LintStatus::Error => "error",
            LintStatus::Fatal => "fatal",
        }
    }
}

/// Where a certificate came from: the input file and, for multi-document files, its position.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl Location {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            index: None,
        }
    }

    pub fn indexed(path: impl Into<String>, index: u32) -> Self {
        Self {
            path: path.into(),
            index: Some(index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub lint: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Stable identifier intended for dedup and trending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Lint-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Per-certificate lint statuses, keyed by lint name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CertificateSummary {
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub results: BTreeMap<String, LintStatus>,
}

/// Certguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct CertguardData {
    pub profile: String,

    pub inputs_scanned: u32,
    pub certificates_scanned: u32,
    pub lints_run: u32,

    pub findings_total: u32,
    pub findings_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,

    #[serde(default)]
    pub certificates: Vec<CertificateSummary>,
}

/// A generic report envelope.
///
/// Keeping this generic allows certguard to embed tool-specific data while still enforcing a
/// stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = CertguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type CertguardReport = ReportEnvelope<CertguardData>;
