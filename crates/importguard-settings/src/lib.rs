//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, ImportguardConfigV1, MappingTarget, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `importguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ImportguardConfigV1> {
    let cfg: ImportguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profiles + overrides + per-check config
/// + name mapping).
pub fn resolve_config(
    cfg: ImportguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON Schema describing `importguard.toml`.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(ImportguardConfigV1)
}
