use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::{message}`
///
/// Findings read from standard input carry no file annotation.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = f.location.as_ref().filter(|l| l.path != "<stdin>") {
            meta.push_str(&format!("file={}", loc.path));
            if let Some(line) = loc.line {
                meta.push_str(&format!(",line={}", line));
            }
        }

        let check_id = f.check_id.as_deref().unwrap_or("importguard");
        let message = format!("[{}:{}] {}", check_id, f.code, f.message)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}
