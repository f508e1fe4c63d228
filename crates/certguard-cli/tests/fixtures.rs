//! End-to-end CLI integration tests using the certificate fixtures in `tests/fixtures/`.
//!
//! These tests run the CLI from the fixtures directory (so report paths are relative) and verify:
//! 1. Exit code (0 = pass/warn, 2 = fail, 1 = tool error)
//! 2. Verdict, finding codes and per-certificate statuses in the JSON report

use assert_cmd::Command;
use certguard_test_util::normalize_nondeterministic;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a Command for the certguard binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn certguard_cmd() -> Command {
    Command::cargo_bin("certguard").expect("certguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("certguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn read_report(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).expect("Failed to read report");
    serde_json::from_str(&content).expect("Failed to parse report JSON")
}

/// Run `certguard lint` with the given extra args and return (exit code, report).
fn run_lint(inputs: &[&str], extra: &[&str]) -> (i32, Value) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = certguard_cmd()
        .current_dir(fixtures_dir())
        .arg("lint")
        .args(inputs)
        .args(extra)
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    (exit_code, read_report(&report_path))
}

fn codes(report: &Value) -> Vec<&str> {
    report["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .filter_map(|f| f["code"].as_str())
        .collect()
}

fn status_of(report: &Value, cert: usize) -> &str {
    report["data"]["certificates"][cert]["results"]["ev_requires_cps_uri"]
        .as_str()
        .unwrap_or("<missing>")
}

// ============================================================================
// Single-certificate fixtures
// ============================================================================

#[test]
fn ev_with_https_cps_uri_passes() {
    let (code, report) = run_lint(&["certs/ev_pass.json"], &[]);
    assert_eq!(code, 0);
    assert_eq!(report["schema"], "certguard.report.v1");
    assert_eq!(report["verdict"], "pass");
    assert!(codes(&report).is_empty());
    assert_eq!(status_of(&report, 0), "pass");
    assert_eq!(report["data"]["certificates"][0]["location"]["path"], "certs/ev_pass.json");
}

#[test]
fn uuid_policy_oid_does_not_abort_the_run() {
    let (code, report) = run_lint(&["certs/ev_uuid_policy.json"], &[]);
    assert_eq!(code, 0);
    assert_eq!(report["verdict"], "pass");
    assert_eq!(status_of(&report, 0), "pass");
}

#[test]
fn ev_with_http_cps_uri_passes() {
    let (code, report) = run_lint(&["certs/ev_http_pass.json"], &[]);
    assert_eq!(code, 0);
    assert_eq!(status_of(&report, 0), "pass");
}

#[test]
fn ev_without_cps_uri_fails() {
    let (code, report) = run_lint(&["certs/ev_missing_uri.json"], &[]);
    assert_eq!(code, 2);
    assert_eq!(report["verdict"], "fail");
    assert_eq!(codes(&report), vec!["http_cps_uri_missing"]);

    let finding = &report["findings"][0];
    assert_eq!(finding["severity"], "error");
    assert_eq!(finding["lint"], "ev_requires_cps_uri");
    assert_eq!(finding["location"]["path"], "certs/ev_missing_uri.json");
    assert!(finding["location"].get("index").is_none());
    assert_eq!(finding["data"]["has_cps_oid"], true);
    assert_eq!(finding["data"]["has_http_cps_uri"], false);
    assert_eq!(finding["data"]["citation"], "EVG 9.7 (3)");
    assert!(finding["fingerprint"].as_str().is_some_and(|f| f.len() == 64));
}

#[test]
fn ev_without_cps_qualifier_fails() {
    let (code, report) = run_lint(&["certs/ev_no_cps_oid.json"], &[]);
    assert_eq!(code, 2);
    assert_eq!(codes(&report), vec!["cps_qualifier_missing"]);
}

#[test]
fn non_http_schemes_fail() {
    for fixture in ["certs/ev_ftp_uri.json", "certs/ev_uppercase_scheme.json"] {
        let (code, report) = run_lint(&[fixture], &[]);
        assert_eq!(code, 2, "{fixture}");
        assert_eq!(codes(&report), vec!["http_cps_uri_missing"], "{fixture}");
    }
}

#[test]
fn ca_and_non_ev_certificates_are_not_applicable() {
    for fixture in ["certs/ev_intermediate.json", "certs/ov_subscriber.json"] {
        let (code, report) = run_lint(&[fixture], &[]);
        assert_eq!(code, 0, "{fixture}");
        assert_eq!(status_of(&report, 0), "not_applicable", "{fixture}");
    }
}

#[test]
fn certificates_before_effective_date_are_not_effective() {
    let (code, report) = run_lint(&["certs/ev_before_effective.json"], &[]);
    assert_eq!(code, 0);
    assert_eq!(status_of(&report, 0), "not_effective");
}

// ============================================================================
// Batches, directories and configuration
// ============================================================================

#[test]
fn batch_file_reports_indexed_locations() {
    let (code, report) = run_lint(&["batch/mixed.json"], &[]);
    assert_eq!(code, 2);
    assert_eq!(report["data"]["certificates_scanned"], 3);
    assert_eq!(report["data"]["inputs_scanned"], 1);
    assert_eq!(status_of(&report, 0), "pass");
    assert_eq!(status_of(&report, 1), "error");
    assert_eq!(status_of(&report, 2), "not_applicable");
    assert_eq!(report["findings"][0]["location"]["index"], 1);
    assert_eq!(codes(&report), vec!["cps_qualifier_missing"]);
}

#[test]
fn directory_scan_orders_findings_deterministically() {
    let (code, report) = run_lint(&["certs"], &[]);
    assert_eq!(code, 2);

    let paths: Vec<&str> = report["findings"]
        .as_array()
        .expect("findings")
        .iter()
        .filter_map(|f| f["location"]["path"].as_str())
        .collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
    assert_eq!(paths.len(), 4);

    let (_, again) = run_lint(&["certs"], &[]);
    assert_eq!(
        normalize_nondeterministic(report),
        normalize_nondeterministic(again)
    );
}

#[test]
fn max_findings_truncates() {
    let (code, report) = run_lint(&["certs"], &["--max-findings", "1"]);
    assert_eq!(code, 2);
    assert_eq!(report["data"]["findings_emitted"], 1);
    assert_eq!(report["data"]["findings_total"], 4);
    assert!(report["data"]["truncated_reason"].is_string());
}

#[test]
fn config_can_disable_the_lint() {
    let (code, report) = run_lint(
        &["certs/ev_missing_uri.json"],
        &["--config", "config/disable_ev.toml"],
    );
    assert_eq!(code, 0);
    assert_eq!(report["verdict"], "pass");
    assert_eq!(report["data"]["lints_run"], 0);
}

#[test]
fn config_ev_policy_oids_extend_applicability() {
    let (code, report) = run_lint(&["custom/private_ev.json"], &[]);
    assert_eq!(code, 0);
    assert_eq!(status_of(&report, 0), "not_applicable");

    let (code, report) = run_lint(
        &["custom/private_ev.json"],
        &["--config", "config/custom_ev_oid.toml"],
    );
    assert_eq!(code, 2);
    assert_eq!(codes(&report), vec!["http_cps_uri_missing"]);
}

#[test]
fn profile_override_is_recorded() {
    let (_, report) = run_lint(&["certs/ev_pass.json"], &["--profile", "pedantic"]);
    assert_eq!(report["data"]["profile"], "pedantic");
}

// ============================================================================
// Tool errors
// ============================================================================

#[test]
fn invalid_config_writes_runtime_error_report() {
    let (code, report) = run_lint(
        &["certs/ev_pass.json"],
        &["--config", "config/invalid_profile.toml"],
    );
    assert_eq!(code, 1);
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["findings"][0]["lint"], "tool.runtime");
    assert_eq!(report["findings"][0]["code"], "runtime_error");
}

#[test]
fn missing_input_is_a_tool_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    certguard_cmd()
        .current_dir(fixtures_dir())
        .args(["lint", "certs/does_not_exist.json", "--report-out"])
        .arg(&report_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does_not_exist.json"));

    let report = read_report(&report_path);
    assert_eq!(report["findings"][0]["code"], "runtime_error");
}

#[test]
fn malformed_document_is_a_tool_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let bad = temp_dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"role": "subscriber", "policy_identifiers": ["1..2"]}"#)
        .expect("write bad input");
    let report_path = temp_dir.path().join("report.json");

    certguard_cmd()
        .arg("lint")
        .arg(&bad)
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1);
}

// ============================================================================
// Rendering from a written report
// ============================================================================

#[test]
fn markdown_and_annotations_render_from_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");
    let md_path = temp_dir.path().join("comment.md");

    certguard_cmd()
        .current_dir(fixtures_dir())
        .args(["lint", "batch/mixed.json", "--write-markdown", "--report-out"])
        .arg(&report_path)
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .code(2);

    let md = std::fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.contains("Verdict: **FAIL**"));
    assert!(md.contains("batch/mixed.json#1"));

    certguard_cmd()
        .args(["md", "--report"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Certificates"));

    certguard_cmd()
        .args(["annotations", "--report"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "::error file=batch/mixed.json,title=ev_requires_cps_uri::",
        ));
}

// ============================================================================
// list / explain
// ============================================================================

#[test]
fn list_shows_registered_lints() {
    certguard_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ev_requires_cps_uri"))
        .stdout(predicate::str::contains("EVG 9.7 (3)"));

    let output = certguard_cmd()
        .args(["list", "--json"])
        .output()
        .expect("run list --json");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("list json");
    assert_eq!(json[0]["name"], "ev_requires_cps_uri");
    assert_eq!(json[0]["source"], "cabf_ev_guidelines");
}

#[test]
fn explain_known_and_unknown_identifiers() {
    certguard_cmd()
        .args(["explain", "http_cps_uri_missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"))
        .stdout(predicate::str::contains("Citation:  EVG 9.7 (3) (cabf_ev_guidelines)"));

    certguard_cmd()
        .args(["explain", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown lint or code: nope"));
}

#[test]
fn json_log_format_writes_to_stderr_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = certguard_cmd()
        .current_dir(fixtures_dir())
        .env("CERTGUARD_LOG", "debug")
        .args(["--log-format", "json", "lint", "certs/ev_pass.json", "--report-out"])
        .arg(&report_path)
        .output()
        .expect("run lint");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("at least one log line");
    let line: Value = serde_json::from_str(first).expect("json log line");
    assert!(line.get("level").is_some());
}
