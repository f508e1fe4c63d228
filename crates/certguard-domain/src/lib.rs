//! Pure lint evaluation (no IO).
//!
//! Input: certificate views decoded elsewhere plus an explicit lint registry.
//! Output: per-certificate lint statuses, findings, verdict and summary data.

#![forbid(unsafe_code)]

pub mod checks;
pub mod classify;
pub mod dates;
pub mod lint;
pub mod model;
pub mod policy;
pub mod registry;
pub mod report;

mod engine;
mod fingerprint;

#[cfg(test)]
mod test_support;

pub use checks::{builtin_registry, register_builtin};
pub use engine::{evaluate, evaluate_certificate, run_lint};
pub use lint::{Lint, LintMetadata, LintResult, LintSource};
pub use registry::{Registry, RegistryError};
