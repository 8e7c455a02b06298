pub mod filter;
pub mod scan;
pub mod timefile;
pub mod writer;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use filter::ExtensionFilter;
pub use scan::list_timefiles;
pub use timefile::Timefile;
pub use writer::{Placement, Placer};

/// Options for a sort run.
#[derive(Debug, Clone)]
pub struct SortOptions {
    pub source: PathBuf,
    /// Defaults to the source directory when None.
    pub destination: Option<PathBuf>,
    pub recursive: bool,
    /// Copy instead of move.
    pub copy: bool,
    pub extensions: ExtensionFilter,
}

/// Counters for one sort run.
#[derive(Debug, Default)]
pub struct SortResult {
    /// Timefiles found under the source.
    pub matched: u64,
    /// Files copied or moved.
    pub placed: u64,
    /// Files already at their sorted location.
    pub skipped: u64,
    /// Per-file failure messages; the batch completed regardless.
    pub failures: Vec<String>,
}

/// Per-placement callback: (current, total, source path, destination path).
/// Invoked once per successful placement.
pub type PlacementCallback<'a> = dyn Fn(u64, u64, &Path, &Path) + 'a;

/// Find every timefile under `source`, honoring the extension filter.
/// Read-only; the same tree always lists the same files in the same order.
pub fn list(source: &Path, recursive: bool, extensions: &ExtensionFilter) -> Result<Vec<Timefile>> {
    scan::list_timefiles(source, recursive, extensions)
}

/// Sort timefiles under `source` into `<dest>/<year>/<MonthName year>/`
/// folders. Individual placement failures are collected in the result and do
/// not stop the batch.
pub fn sort(options: &SortOptions, on_placed: &PlacementCallback<'_>) -> Result<SortResult> {
    let destination = options.destination.as_deref().unwrap_or(&options.source);
    let timefiles = scan::list_timefiles(&options.source, options.recursive, &options.extensions)?;

    let mut result = SortResult {
        matched: timefiles.len() as u64,
        ..Default::default()
    };

    // Files already at their sorted location are not part of the batch.
    let pending: Vec<&Timefile> = timefiles
        .iter()
        .filter(|t| t.sorted_path(destination) != t.path)
        .collect();
    result.skipped = result.matched - pending.len() as u64;

    let total = pending.len() as u64;
    let mut placer = Placer::new();
    for (i, timefile) in pending.iter().enumerate() {
        match placer.place(timefile, destination, options.copy) {
            Placement::Placed(dest) => {
                result.placed += 1;
                on_placed(i as u64 + 1, total, &timefile.path, &dest);
            }
            Placement::AlreadySorted => result.skipped += 1,
            Placement::Failed(message) => result.failures.push(message),
        }
    }

    Ok(result)
}
