use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},title={lint}::[{lint}:{code}] {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        let mut message = format!("[{}:{}] {}", f.lint, f.code, f.message);
        if let Some(loc) = &f.location {
            meta.push_str(&format!("file={},", escape_property(&loc.path)));
            if let Some(i) = loc.index {
                message.push_str(&format!(" (document {i})"));
            }
        }
        meta.push_str(&format!("title={}", escape_property(&f.lint)));

        out.push(format!("::{} {}::{}", level, meta, escape_data(&message)));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
