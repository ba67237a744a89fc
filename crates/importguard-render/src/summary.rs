use crate::{RenderableGroup, RenderableReport};

/// Plain-text summary for terminals, listing each undeclared import and unused dependency with
/// every location it was seen at.
pub fn render_summary(report: &RenderableReport) -> String {
    let mut out = String::new();

    if !report.undeclared.is_empty() {
        out.push_str("These imports appear to be undeclared dependencies:\n");
        push_groups(&mut out, "imported at", &report.undeclared);
    }

    if !report.unused.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("These dependencies appear to be unused (i.e. not imported):\n");
        push_groups(&mut out, "declared in", &report.unused);
    }

    if out.is_empty() {
        out.push_str("No undeclared or unused dependencies found.\n");
    }

    out
}

fn push_groups(out: &mut String, verb: &str, groups: &[RenderableGroup]) {
    for g in groups {
        out.push_str(&format!("- {:?} {}:\n", g.name, verb));
        for loc in &g.locations {
            out.push_str(&format!("    {}\n", loc));
        }
    }
}
