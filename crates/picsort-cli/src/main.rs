use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use picsort_core::{ExtensionFilter, SortOptions};

#[derive(Parser)]
#[command(
    name = "picsort",
    version,
    about = "Sort timestamp-named photos and videos into year/month folders"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the files that would be sorted within the source directory
    List {
        /// Directory to list valid files from
        source: PathBuf,

        /// Search the whole source directory tree
        #[arg(short, long)]
        recursive: bool,

        /// Extensions to look for (default: jpg, mp4)
        #[arg(short, long, num_args = 1..)]
        extensions: Vec<String>,
    },
    /// Sort files that have a valid name format and a valid extension
    Sort {
        /// Source directory to search
        source: PathBuf,

        /// Destination to organize files into (default: the source directory)
        destination: Option<PathBuf>,

        /// Search the whole source directory tree
        #[arg(short, long)]
        recursive: bool,

        /// Copy files into the destination instead of moving them
        #[arg(short, long)]
        copy: bool,

        /// Print files as they are being organized
        #[arg(short, long)]
        verbose: bool,

        /// Extensions to allow sorting for (default: jpg, mp4)
        #[arg(short, long, num_args = 1..)]
        extensions: Vec<String>,
    },
}

fn extension_filter(extensions: &[String]) -> ExtensionFilter {
    if extensions.is_empty() {
        ExtensionFilter::default()
    } else {
        ExtensionFilter::new(extensions)
    }
}

/// Path relative to the destination root, for readable verbose lines.
fn relative(path: &Path, root: &Path) -> PathBuf {
    pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf())
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::List {
            source,
            recursive,
            extensions,
        } => {
            let found = picsort_core::list(&source, recursive, &extension_filter(&extensions))?;
            for timefile in &found {
                println!("{}", timefile.path.display());
            }
            eprintln!("Number of files: {}", found.len());
        }
        Command::Sort {
            source,
            destination,
            recursive,
            copy,
            verbose,
            extensions,
        } => {
            let options = SortOptions {
                source,
                destination,
                recursive,
                copy,
                extensions: extension_filter(&extensions),
            };
            let dest_root = options
                .destination
                .clone()
                .unwrap_or_else(|| options.source.clone());
            let mode = if copy { "Copying" } else { "Moving" };

            let report = move |current: u64, total: u64, from: &Path, to: &Path| {
                if !verbose {
                    return;
                }
                if current == 1 {
                    println!("{mode} {total} files:");
                }
                println!(
                    " {current}/{total} {} -> {}",
                    relative(from, &dest_root).display(),
                    relative(to, &dest_root).display()
                );
            };

            let result = picsort_core::sort(&options, &report)?;
            for failure in &result.failures {
                eprintln!("Failed: {failure}");
            }
            eprintln!(
                "Done! {} matched, {} placed, {} already sorted, {} failed",
                result.matched,
                result.placed,
                result.skipped,
                result.failures.len()
            );
        }
    }

    Ok(())
}
