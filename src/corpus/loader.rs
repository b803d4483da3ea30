// Read the questioned document and the suspect directory from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::document::Document;

/// Read a single UTF-8 document, labelled with its file name.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.is_file() {
        anyhow::bail!("File '{}' not found.", path.display());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(Document::new(file_label(path), text))
}

/// Read every file in `dir` whose extension is exactly `extension`
/// (case-sensitive, so `.TXT` does not match `txt`).
///
/// Files are returned sorted by name so runs are reproducible. Files that
/// cannot be read as UTF-8 are skipped with a warning; an empty result is an
/// error.
pub fn load_suspects(dir: &Path, extension: &str) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        anyhow::bail!("Directory '{}' not found.", dir.display());
    }

    let extension = extension.trim_start_matches('.');

    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == extension)
        })
        .collect();
    paths.sort();

    let mut suspects = Vec::with_capacity(paths.len());
    for path in &paths {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(file = %path.display(), bytes = text.len(), "Loaded suspect");
                suspects.push(Document::new(file_label(path), text));
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping unreadable suspect file");
            }
        }
    }

    if suspects.is_empty() {
        anyhow::bail!(
            "No readable .{extension} files found in '{}'.",
            dir.display()
        );
    }

    info!(
        count = suspects.len(),
        dir = %dir.display(),
        "Loaded suspect documents"
    );

    Ok(suspects)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
