use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{
    config::Config,
    extract::{FileExtractionResult, extract_file},
};

/// A path whose contents could not be listed or read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of walking a source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Per-file results in visitation order.
    pub results: Vec<FileExtractionResult>,
    /// Number of source files read, with or without literals.
    pub files_scanned: usize,
    /// Directories and files that failed; their subtrees contribute nothing.
    pub skipped: Vec<SkippedPath>,
}

impl ScanResult {
    pub fn literal_count(&self) -> usize {
        self.results.iter().map(|r| r.literals.len()).sum()
    }
}

/// Walk `root` and extract literals from every eligible source file.
///
/// `root` may be a single source file or a directory. Directories are walked
/// depth-first in pre-order, entries sorted by file name. Every entry below
/// the root passes through [`should_include`]; excluded directories are not
/// descended into. Listing and read failures are recorded in
/// [`ScanResult::skipped`] and never abort the walk.
pub fn collect_results(root: &Path, config: &Config) -> ScanResult {
    let mut scan = ScanResult::default();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| is_included_entry(entry, config));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                scan.skipped.push(SkippedPath {
                    path,
                    reason: format!("Cannot access path: {}", e),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() || !config.is_source_file(&entry_name(&entry)) {
            continue;
        }

        scan.files_scanned += 1;
        match extract_file(entry.path(), config) {
            Ok(Some(result)) => scan.results.push(result),
            Ok(None) => {}
            Err(e) => scan.skipped.push(SkippedPath {
                path: entry.path().to_path_buf(),
                reason: format!("{:#}", e),
            }),
        }
    }

    scan
}

/// The root itself is never filtered, only what is listed beneath it.
fn is_included_entry(entry: &DirEntry, config: &Config) -> bool {
    entry.depth() == 0
        || should_include(
            &entry_name(entry),
            &config.block_substrings,
            &config.block_exact_names,
        )
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

/// Exclusion filter for a single path segment (file or directory name).
///
/// A name is excluded when it is hidden, contains any blocked substring, or
/// equals a blocked name exactly.
pub fn should_include(
    name: &str,
    block_substrings: &[String],
    block_exact_names: &[String],
) -> bool {
    !name.starts_with('.')
        && !block_substrings
            .iter()
            .any(|blocked| name.contains(blocked.as_str()))
        && !block_exact_names.iter().any(|blocked| name == blocked)
}
