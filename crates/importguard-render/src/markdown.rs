use crate::{RenderableGroup, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Importguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict, report.data.findings_emitted, report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
    } else {
        out.push_str("## Findings\n\n");

        for f in &report.findings {
            let sev = match f.severity {
                RenderableSeverity::Info => "INFO",
                RenderableSeverity::Warning => "WARN",
                RenderableSeverity::Error => "ERROR",
            };

            out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}",
                sev,
                f.check_id.as_deref().unwrap_or(""),
                f.code,
                f.message
            ));
            if let Some(loc) = &f.location {
                out.push_str(&format!(" (`{}`)", loc));
            }
            out.push('\n');

            if let Some(help) = &f.help {
                out.push_str(&format!("  - help: {}\n", help));
            }
            if let Some(url) = &f.url {
                out.push_str(&format!("  - url: {}\n", url));
            }
        }
    }

    push_groups(&mut out, "Undeclared imports", "imported at", &report.undeclared);
    push_groups(&mut out, "Unused dependencies", "declared in", &report.unused);

    out
}

fn push_groups(out: &mut String, title: &str, verb: &str, groups: &[RenderableGroup]) {
    if groups.is_empty() {
        return;
    }

    out.push_str(&format!("\n## {}\n\n", title));
    for g in groups {
        let locations: Vec<String> = g.locations.iter().map(|l| format!("`{}`", l)).collect();
        out.push_str(&format!(
            "- `{}` {}: {}\n",
            g.name,
            verb,
            locations.join(", ")
        ));
    }
}
