//! Collector output parsing.
//!
//! Both collectors emit a JSON array of `{"name": ..., "location": {"path": ..., "line": ...}}`
//! objects. Blank input means the collector found nothing.

use anyhow::Context;
use importguard_types::{DeclaredDependency, ParsedImport};

pub fn parse_imports_json(text: &str) -> anyhow::Result<Vec<ParsedImport>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).context("parse imports json")
}

pub fn parse_dependencies_json(text: &str) -> anyhow::Result<Vec<DeclaredDependency>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).context("parse dependencies json")
}
