use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::timefile::Timefile;

/// Outcome of placing a single timefile.
#[derive(Debug)]
pub enum Placement {
    /// File copied or moved to its sorted location.
    Placed(PathBuf),
    /// Destination already holds this file (same path, or same size from an
    /// earlier run).
    AlreadySorted,
    /// Per-file failure; the batch keeps going.
    Failed(String),
}

/// Places timefiles into their year/month folders. Destination directories
/// are created once per run.
#[derive(Debug, Default)]
pub struct Placer {
    created_dirs: HashSet<PathBuf>,
}

impl Placer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy or move `timefile` into its sorted location under `destination`.
    pub fn place(&mut self, timefile: &Timefile, destination: &Path, copy: bool) -> Placement {
        let dest = timefile.sorted_path(destination);

        if dest == timefile.path {
            return Placement::AlreadySorted;
        }

        let Some(dir) = dest.parent() else {
            return Placement::Failed(format!(
                "{}: no parent directory for {}",
                timefile.filename,
                dest.display()
            ));
        };
        if !self.created_dirs.contains(dir) {
            if let Err(e) = fs::create_dir_all(dir) {
                return Placement::Failed(format!(
                    "{}: cannot create {}: {}",
                    timefile.filename,
                    dir.display(),
                    e
                ));
            }
            self.created_dirs.insert(dir.to_path_buf());
        }

        // Refuse collisions with a different file; a same-size file at the
        // destination counts as already placed by an earlier run.
        if let Ok(existing) = fs::metadata(&dest) {
            let same_size = fs::metadata(&timefile.path)
                .map(|m| m.len() == existing.len())
                .unwrap_or(false);
            if same_size {
                return Placement::AlreadySorted;
            }
            return Placement::Failed(format!(
                "{}: destination {} already exists",
                timefile.filename,
                dest.display()
            ));
        }

        let result = if copy {
            fs::copy(&timefile.path, &dest).map(|_| ())
        } else {
            move_file(&timefile.path, &dest)
        };

        match result {
            Ok(()) => Placement::Placed(dest),
            Err(e) => Placement::Failed(format!("{}: {}", timefile.filename, e)),
        }
    }
}

/// Rename, falling back to copy+remove when source and destination are on
/// different filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
