//! The `check` use case: compare imports to dependencies and produce a report.

use anyhow::Context;
use importguard_domain::model::AuditInput;
use importguard_settings::{Overrides, ResolvedConfig};
use importguard_types::{ImportguardReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::input::{parse_dependencies_json, parse_imports_json};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Import Collector output (JSON array; empty string if nothing was collected).
    pub imports_json: &'a str,
    /// Dependency Collector output (JSON array; empty string if nothing was collected).
    pub dependencies_json: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ImportguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config and inputs, compare, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        importguard_settings::ImportguardConfigV1::default()
    } else {
        importguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = importguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    debug!(
        profile = %resolved.effective.profile,
        mapping_entries = resolved.effective.resolver.mapping_len(),
        max_findings = resolved.effective.max_findings,
        "resolved config"
    );

    let imports = parse_imports_json(input.imports_json)?;
    let dependencies = parse_dependencies_json(input.dependencies_json)?;
    debug!(
        imports = imports.len(),
        dependencies = dependencies.len(),
        "loaded collector output"
    );

    let audit = AuditInput::new(imports, dependencies);
    let domain_report = importguard_domain::evaluate(&audit, &resolved.effective);
    let importguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        counts,
        comparison,
    } = domain_report;

    info!(
        verdict = ?verdict,
        undeclared = comparison.undeclared.len(),
        unused = comparison.unused.len(),
        errors = counts.error,
        warnings = counts.warning,
        "comparison complete"
    );

    let finished_at = OffsetDateTime::now_utc();
    let (undeclared, unused) = comparison.into_parts();

    let report = ImportguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "importguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        findings,
        data,
        undeclared,
        unused,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
