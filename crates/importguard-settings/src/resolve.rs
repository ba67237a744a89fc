use crate::model::{ImportguardConfigV1, SCHEMA_CONFIG_V1};
use crate::presets;
use anyhow::Context;
use globset::Glob;
use importguard_domain::NameResolver;
use importguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use importguard_types::{Severity, explain};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: ImportguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != SCHEMA_CONFIG_V1 {
            anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
        }
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if !explain::all_check_ids()
            .iter()
            .any(|id| *id == check_id.as_str())
        {
            anyhow::bail!(
                "unknown check_id in [checks]: {check_id} (expected one of: {})",
                explain::all_check_ids().join(", ")
            );
        }

        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.ignore.is_empty() {
            validate_ignore(check_id, &cc.ignore)?;
            entry.ignore = cc.ignore.clone();
        }
    }

    // fail_on: CLI override wins over config
    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    effective.resolver = NameResolver::new(
        cfg.mapping
            .iter()
            .map(|(import_name, target)| (import_name, target.candidates())),
    );

    Ok(ResolvedConfig { effective })
}

fn validate_ignore(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid ignore glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
