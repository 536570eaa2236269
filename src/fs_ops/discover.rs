//! Fuzzy file discovery.
//! When a move-table source is absent at its expected path, the whole tree
//! is scanned for files sharing its basename. The scan never guesses:
//! anything other than exactly one candidate is a typed lookup failure.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::LookupError;

/// Locate the unique file named `file_name` anywhere under `root`,
/// skipping the directories named in `excluded_dirs` (and their contents).
///
/// Candidates are sorted so diagnostics are stable across runs.
pub fn find_unique(
    root: &Path,
    file_name: &OsStr,
    excluded_dirs: &[&str],
) -> Result<PathBuf, LookupError> {
    let mut candidates: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .is_some_and(|name| excluded_dirs.contains(&name)))
        })
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && e.file_name() == file_name)
        .map(|e| e.into_path())
        .collect();

    candidates.sort();

    debug!(
        name = %file_name.to_string_lossy(),
        count = candidates.len(),
        "fuzzy scan complete"
    );

    match candidates.len() {
        0 => Err(LookupError::NotFound),
        1 => Ok(candidates.remove(0)),
        _ => Err(LookupError::Ambiguous(candidates)),
    }
}
