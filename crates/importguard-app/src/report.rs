use anyhow::Context;
use importguard_render::{
    RenderableData, RenderableFinding, RenderableGroup, RenderableLocation, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
use importguard_types::{
    Finding, ImportguardData, ImportguardReport, Location, SCHEMA_REPORT_V1, Severity, ToolMeta,
    Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<ImportguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse importguard v1 report")
}

pub fn serialize_report(report: &ImportguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Report written when the check could not run to completion.
pub fn runtime_error_report(message: &str) -> ImportguardReport {
    let now = OffsetDateTime::now_utc();
    let finding = Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
        code: ids::CODE_RUNTIME_ERROR.to_string(),
        message: message.to_string(),
        location: None,
        help: Some(
            "Check the collector output files and importguard.toml, then re-run.".to_string(),
        ),
        url: None,
        fingerprint: None,
        data: serde_json::Value::Null,
    };

    ImportguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "importguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![finding],
        data: ImportguardData {
            findings_total: 1,
            findings_emitted: 1,
            ..ImportguardData::default()
        },
        undeclared: Vec::new(),
        unused: Vec::new(),
    }
}

pub fn to_renderable(report: &ImportguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
        undeclared: report
            .undeclared
            .iter()
            .map(|u| RenderableGroup {
                name: u.name.clone(),
                locations: u.references.iter().map(|r| renderable_location(&r.location)).collect(),
            })
            .collect(),
        unused: report
            .unused
            .iter()
            .map(|u| RenderableGroup {
                name: u.name.clone(),
                locations: u.references.iter().map(|r| renderable_location(&r.location)).collect(),
            })
            .collect(),
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(renderable_location),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

fn renderable_location(loc: &Location) -> RenderableLocation {
    RenderableLocation {
        path: loc.path.as_str().to_string(),
        line: loc.line,
    }
}
