//! Use case orchestration for certguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, input,
//! domain, and render layers. It stays thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod lint;
mod list;
mod render;
mod report;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use lint::{LintInput, LintOutput, run_lint, verdict_exit_code};
pub use list::{LintListing, format_list, run_list};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
