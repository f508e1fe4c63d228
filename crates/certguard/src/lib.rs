//! Certificate lint registry and evaluation engine.
//!
//! Embedders build a registry explicitly, then run lints over certificate views:
//!
//! ```
//! use certguard::{EvPolicyTable, builtin_registry, run_lint};
//! use certguard::model::CertificateView;
//! use certguard::types::{CertificateRole, LintStatus, Oid};
//!
//! let registry = builtin_registry(&EvPolicyTable::builtin()).expect("builtin lints");
//! let lint = registry.get("ev_requires_cps_uri").expect("registered");
//!
//! let cert = CertificateView {
//!     subject: None,
//!     serial: None,
//!     not_before: None,
//!     role: CertificateRole::Subscriber,
//!     policy_identifiers: vec!["2.23.140.1.1".parse().expect("oid")],
//!     qualifier_id: vec![vec![Oid::id_qt_cps()]],
//!     cps_uri: vec![vec!["https://ca.example/cps".to_string()]],
//! };
//! assert_eq!(run_lint(lint, &cert).status, LintStatus::Pass);
//! ```

#![forbid(unsafe_code)]

pub use certguard_domain::classify::EvPolicyTable;
pub use certguard_domain::policy::{EffectiveConfig, FailOn, LintPolicy};
pub use certguard_domain::report::DomainReport;
pub use certguard_domain::{
    Lint, LintMetadata, LintResult, LintSource, Registry, RegistryError, builtin_registry,
    evaluate, evaluate_certificate, register_builtin, run_lint,
};
pub use certguard_domain::{checks, dates, model};

/// Wire types shared with reports and certificate documents.
pub use certguard_types as types;
