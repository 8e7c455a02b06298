use std::path::Path;

use anyhow::{bail, Result};
use walkdir::WalkDir;

use crate::filter::ExtensionFilter;
use crate::timefile::Timefile;

/// Enumerate timefiles under `source` in deterministic name-sorted order.
/// Non-recursive mode only looks at the directory's direct children.
/// Read-only; unreadable entries are skipped.
pub fn list_timefiles(
    source: &Path,
    recursive: bool,
    filter: &ExtensionFilter,
) -> Result<Vec<Timefile>> {
    if !source.exists() {
        bail!("source does not exist: {}", source.display());
    }
    if !source.is_dir() {
        bail!("source is not a directory: {}", source.display());
    }

    let mut walker = WalkDir::new(source).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut found = Vec::new();
    for entry in walker.into_iter().flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !filter.matches(path) {
            continue;
        }
        if let Some(timefile) = Timefile::classify(path) {
            found.push(timefile);
        }
    }

    Ok(found)
}
