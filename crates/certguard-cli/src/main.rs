//! CLI entry point for certguard.
//!
//! This module is thin: it handles argument parsing, logging setup, I/O, and exit codes.
//! All business logic lives in the `certguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use certguard_app::{
    ExplainOutput, LintInput, format_list, parse_report_json, render_annotations,
    render_markdown, run_explain, run_lint, run_list, runtime_error_report, serialize_report,
    to_renderable, verdict_exit_code,
};
use certguard_settings::Overrides;
use certguard_types::CertguardReport;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "certguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "certguard",
    version,
    about = "Policy linter for pre-decoded X.509 certificates"
)]
struct Cli {
    /// Log output format (stderr). Filter with CERTGUARD_LOG, e.g. `CERTGUARD_LOG=debug`.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint certificate documents and write artifacts.
    Lint {
        /// Certificate document files, or directories to scan for `*.json`.
        #[arg(required = true)]
        paths: Vec<Utf8PathBuf>,

        /// Path to certguard config TOML. Defaults to `certguard.toml` if present.
        #[arg(long)]
        config: Option<Utf8PathBuf>,

        /// Override profile (strict|pedantic).
        #[arg(long)]
        profile: Option<String>,

        /// Override maximum findings to emit.
        #[arg(long)]
        max_findings: Option<u32>,

        /// Override failure threshold (error|warning).
        #[arg(long)]
        fail_on: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/certguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/certguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// List the registered lints with their citation and effective date.
    List {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/certguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/certguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a lint or code with remediation guidance.
    Explain {
        /// The lint name (e.g., "ev_requires_cps_uri") or code (e.g., "http_cps_uri_missing").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.cmd {
        Commands::Lint {
            paths,
            config,
            profile,
            max_findings,
            fail_on,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_lint(LintArgs {
            paths,
            config,
            overrides: Overrides {
                profile,
                max_findings,
                fail_on,
            },
            report_out,
            write_markdown,
            markdown_out,
        }),
        Commands::List { json } => cmd_list(json),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_env("CERTGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

struct LintArgs {
    paths: Vec<Utf8PathBuf>,
    config: Option<Utf8PathBuf>,
    overrides: Overrides,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
}

fn cmd_lint(args: LintArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(args.config.as_deref())?;

        let output = run_lint(LintInput {
            inputs: &args.paths,
            config_text: &cfg_text,
            overrides: args.overrides.clone(),
        })?;

        write_report_file(&args.report_out, &output.report).context("write report json")?;
        tracing::debug!(path = %args.report_out, "wrote report");

        if args.write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(&args.markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(&output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "lint run failed");
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report_file(&args.report_out, &report) {
                tracing::warn!(error = %write_err, "could not write runtime error report");
            }
            eprintln!("certguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Explicit config paths must exist; the default `certguard.toml` is optional.
fn read_config(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read config: {p}")),
        None => {
            let p = Utf8Path::new(DEFAULT_CONFIG);
            if p.exists() {
                std::fs::read_to_string(p).with_context(|| format!("read config: {p}"))
            } else {
                tracing::debug!("no {DEFAULT_CONFIG} found; using defaults");
                Ok(String::new())
            }
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &CertguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<CertguardReport> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_list(json: bool) -> anyhow::Result<()> {
    let lints = run_list()?;
    if json {
        let text = serde_json::to_string_pretty(&lints).context("serialize lint list")?;
        println!("{text}");
    } else {
        print!("{}", format_list(&lints));
    }
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier)? {
        ExplainOutput::Found { explanation, lint } => {
            print!(
                "{}",
                certguard_app::format_explanation(&explanation, lint.as_ref())
            );
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_lints,
            available_codes,
        } => {
            eprint!(
                "{}",
                certguard_app::format_not_found(&identifier, available_lints, available_codes)
            );
            std::process::exit(1);
        }
    }
}
