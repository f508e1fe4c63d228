//! Stable identifiers for lints and finding codes.
//!
//! Lint names are snake_case and globally unique within a registry. `code` is a short
//! snake_case discriminator for why a lint did not pass.

// Lints
pub const LINT_EV_REQUIRES_CPS_URI: &str = "ev_requires_cps_uri";

// Codes: ev_requires_cps_uri
pub const CODE_CPS_QUALIFIER_MISSING: &str = "cps_qualifier_missing";
pub const CODE_HTTP_CPS_URI_MISSING: &str = "http_cps_uri_missing";

// Fallback when a lint reports a failing status without a code.
pub const CODE_LINT_FAILED: &str = "lint_failed";

// Tool-level
pub const LINT_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
