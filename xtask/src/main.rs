//! Developer tasks (schema generation, conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent directory")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(certguard_types::CertguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(certguard_settings::CertguardConfigV1)
}

fn generate_certificate_schema() -> schemars::Schema {
    schema_for!(certguard_types::CertificateDocument)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "certguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "certguard.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "certguard.certificate.v1.json",
            generate: generate_certificate_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run the certguard binary on fixtures and validate its reports");
    eprintln!("  explain-coverage  Validate all lint names and codes have explanations");
}

/// Check that a path is clean: no absolute paths, no `../`, forward slashes only.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.contains("..")
        || path.contains('\\')
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Report conformance against the generated report schema.
///
/// For every certificate fixture under `tests/fixtures/certs`:
/// 1. runs the built `certguard` binary from `tests/fixtures` with relative input paths
/// 2. validates the written report against the generated `certguard.report.v1` schema
/// 3. checks that finding locations are clean relative paths
/// 4. compares against `tests/fixtures/golden/<name>.report.json` when one exists
fn conform() -> anyhow::Result<()> {
    let root = project_root()?;

    let schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to convert report schema to JSON")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;
    println!("✓ certguard.report.v1 schema compiles");

    let mut certguard_bin = root.join("target").join("debug").join("certguard");
    if cfg!(target_os = "windows") {
        certguard_bin.set_extension("exe");
    }
    if !certguard_bin.exists() {
        bail!(
            "certguard binary not found at {}.\n\
            Run `cargo build -p certguard-cli` first.",
            certguard_bin.display()
        );
    }

    let fixtures_dir = root.join("tests").join("fixtures");
    let certs_dir = fixtures_dir.join("certs");
    let golden_dir = fixtures_dir.join("golden");

    let mut entries: Vec<PathBuf> = fs::read_dir(&certs_dir)
        .with_context(|| format!("Failed to read {}", certs_dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    entries.retain(|p| p.extension().is_some_and(|ext| ext == "json"));
    entries.sort();

    if entries.is_empty() {
        bail!("No certificate fixtures found in {}", certs_dir.display());
    }

    let mut errors = Vec::new();

    for fixture in &entries {
        let stem = fixture
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let relative = format!("certs/{}.json", stem);

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&certguard_bin)
            .current_dir(&fixtures_dir)
            .arg("lint")
            .arg(&relative)
            .arg("--report-out")
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run certguard on fixture '{}'", stem))?;

        // 0 and 2 both mean a report was produced.
        if !matches!(output.status.code(), Some(0) | Some(2)) {
            errors.push(format!(
                "fixture '{}': certguard exited with {:?}: {}",
                stem,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let content = fs::read_to_string(&report_out)
            .with_context(|| format!("fixture '{}': no report output generated", stem))?;
        let report: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse report for fixture '{}'", stem))?;

        for err in validator.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", stem, err));
        }

        if let Some(findings) = report.get("findings").and_then(|v| v.as_array()) {
            for (i, finding) in findings.iter().enumerate() {
                if let Some(path) = finding
                    .get("location")
                    .and_then(|loc| loc.get("path"))
                    .and_then(|v| v.as_str())
                    && !is_clean_path(path)
                {
                    errors.push(format!(
                        "fixture '{}': findings[{}].location.path '{}' is not clean",
                        stem, i, path
                    ));
                }
            }
        }

        let golden_path = golden_dir.join(format!("{}.report.json", stem));
        if golden_path.exists() {
            let golden_content = fs::read_to_string(&golden_path)
                .with_context(|| format!("Failed to read {}", golden_path.display()))?;
            let golden: serde_json::Value = serde_json::from_str(&golden_content)
                .with_context(|| format!("Failed to parse {}", golden_path.display()))?;

            let normalized_report = certguard_test_util::normalize_nondeterministic(report);
            let normalized_golden = certguard_test_util::normalize_nondeterministic(golden);
            if normalized_report != normalized_golden {
                errors.push(format!(
                    "fixture '{}': output differs from golden file {}.report.json",
                    stem, stem
                ));
                continue;
            }
            println!("  ✓ {} matches golden report", stem);
        } else {
            println!("  ✓ {} produces a valid report", stem);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", entries.len());
    Ok(())
}

/// Validate that all lint names and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let lint_names = certguard_types::explain::all_lint_names();
    let codes = certguard_types::explain::all_codes();

    let mut errors = Vec::new();

    for (kind, ids) in [("Lint", lint_names), ("Code", codes)] {
        for id in ids {
            match certguard_types::explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{} '{}' has empty remediation", kind, id));
                    }
                    for (side, text) in [("before", exp.examples.before), ("after", exp.examples.after)] {
                        if let Err(e) =
                            serde_json::from_str::<certguard_types::CertificateDocument>(text)
                        {
                            errors.push(format!(
                                "{} '{}' has an invalid {} example: {}",
                                kind, id, side, e
                            ));
                        }
                    }
                }
                None => errors.push(format!("{} '{}' has no explanation", kind, id)),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} lint names have explanations", lint_names.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_paths_are_relative_with_forward_slashes() {
        assert!(is_clean_path("certs/ev_pass.json"));
        assert!(!is_clean_path("/etc/certs/ev_pass.json"));
        assert!(!is_clean_path("../certs/ev_pass.json"));
        assert!(!is_clean_path("certs\\ev_pass.json"));
        assert!(!is_clean_path("C:/certs/ev_pass.json"));
    }

    #[test]
    fn schema_filenames_are_unique_and_versioned() {
        let specs = schema_specs();
        let mut names: Vec<_> = specs.iter().map(|s| s.filename).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), specs.len());
        assert!(names.iter().all(|n| n.starts_with("certguard.") && n.ends_with(".v1.json")));
    }

    #[test]
    fn generated_report_schema_compiles() {
        let value = serde_json::to_value(generate_report_schema()).expect("schema to json");
        assert!(jsonschema::validator_for(&value).is_ok());
    }
}
