use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Expand the input paths into the list of certificate document files to read.
///
/// Behavior:
/// - A file path is taken as-is, whatever its extension.
/// - A directory is walked recursively for `*.json` files.
/// - A missing path is an error.
///
/// The result is sorted and de-duplicated so evaluation order does not depend on the
/// filesystem.
pub fn discover_inputs(paths: &[Utf8PathBuf]) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut out = Vec::new();

    for path in paths {
        let meta = std::fs::metadata(path).with_context(|| format!("input not found: {path}"))?;
        if meta.is_file() {
            out.push(path.clone());
            continue;
        }

        let before = out.len();
        for abs in WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
            .filter(|p| is_json(p))
        {
            out.push(abs);
        }
        tracing::debug!(dir = %path, files = out.len() - before, "walked input directory");
    }

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

fn is_json(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
