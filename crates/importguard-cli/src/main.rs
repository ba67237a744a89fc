//! CLI entry point for importguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `importguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use importguard_app::{
    parse_report_json, render_annotations, render_markdown, render_summary, run_check,
    run_explain, runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
    CheckInput, ExplainOutput,
};
use importguard_settings::Overrides;
use importguard_types::ImportguardReport;
use std::io::Read;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(
    name = "importguard",
    version,
    about = "Find undeclared and unused Python dependencies"
)]
struct Cli {
    /// Path to importguard config TOML.
    #[arg(long, global = true, default_value = "importguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override when the check fails (error|warning).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long, global = true)]
    max_findings: Option<u32>,

    /// Log debug details to stderr.
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare collected imports to declared dependencies and write artifacts.
    Check {
        /// Import Collector output (JSON array). Use `-` for stdin.
        #[arg(long)]
        imports: Utf8PathBuf,

        /// Dependency Collector output (JSON array). Use `-` for stdin.
        #[arg(long)]
        dependencies: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/importguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/importguard/comment.md")]
        markdown_out: Utf8PathBuf,

        /// Print the undeclared/unused summary to stdout.
        #[arg(long)]
        summary: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/importguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/importguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "deps.unused") or code (e.g., "undeclared_import") to explain.
        identifier: String,
    },

    /// Print the JSON Schema for importguard.toml.
    ConfigSchema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    match cli.cmd {
        Commands::Check {
            ref imports,
            ref dependencies,
            ref report_out,
            write_markdown,
            ref markdown_out,
            summary,
        } => cmd_check(
            &cli,
            imports,
            dependencies,
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
            summary,
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::ConfigSchema => cmd_config_schema(),
    }
}

/// Logs go to stderr so stdout stays clean for summaries and rendered output.
/// `RUST_LOG`, when set, takes precedence over the flag-derived level.
fn init_tracing(verbose: bool, quiet: bool) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialize logging: {e}"))
}

fn cmd_check(
    cli: &Cli,
    imports: &Utf8Path,
    dependencies: &Utf8Path,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
    summary: bool,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        if imports.as_str() == "-" && dependencies.as_str() == "-" {
            anyhow::bail!("only one of --imports and --dependencies can read from stdin");
        }

        // Missing config file is allowed (defaults apply).
        let cfg_text = if cli.config.exists() {
            std::fs::read_to_string(&cli.config)
                .with_context(|| format!("read config: {}", cli.config))?
        } else {
            debug!(path = %cli.config, "no config file; using defaults");
            String::new()
        };

        let imports_json = read_input(imports).context("read imports")?;
        let dependencies_json = read_input(dependencies).context("read dependencies")?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            fail_on: cli.fail_on.clone(),
            max_findings: cli.max_findings,
        };

        let output = run_check(CheckInput {
            imports_json: &imports_json,
            dependencies_json: &dependencies_json,
            config_text: &cfg_text,
            overrides,
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if let Some(md_path) = markdown_out {
            let md = render_markdown(&renderable);
            write_text_file(md_path, &md).context("write markdown")?;
        }
        if summary {
            print!("{}", render_summary(&renderable));
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report_file(report_out, &report) {
                error!(error = %format!("{write_err:#}"), "could not write runtime error report");
            }
            eprintln!("importguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("read {}", path))
}

fn write_report_file(
    path: &Utf8Path,
    report: &ImportguardReport,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", importguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                importguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_config_schema() -> anyhow::Result<()> {
    let schema = importguard_settings::config_schema();
    let text = serde_json::to_string_pretty(&schema).context("serialize config schema")?;
    println!("{}", text);
    Ok(())
}
