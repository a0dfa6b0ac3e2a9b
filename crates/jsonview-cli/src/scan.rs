//! Merge a directory tree of `.json` files into one document.
//!
//! Each file lands at the dotted path formed from its path relative to the
//! scanned directory, with every component cut at its first `.`:
//! `users/ada.json` is stored under `users.ada`, `settings.json` under
//! `settings`.

use anyhow::{Context, Result};
use jsonview_core::Cursor;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Read every `*.json` file under `root` into a single document.
pub fn merge_dir(root: &Path) -> Result<Cursor> {
    let doc = Cursor::missing();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|e| e != "json") {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let dotted = dotted_path(relative);
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let parsed = Cursor::parse(&text)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

        debug!(file = %path.display(), path = %dotted, "merging file");
        doc.select(&dotted).set(&parsed);
    }

    Ok(doc)
}

fn dotted_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(|c| c.split('.').next().unwrap_or_default())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
