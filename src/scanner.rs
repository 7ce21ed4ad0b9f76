use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use colored::Colorize;
use walkdir::WalkDir;

use crate::models::Candidate;

/// Recognized license file names, in fixed priority order. When a directory
/// carries more than one, the earliest name in this list wins.
pub const LICENSE_FILE_NAMES: [&str; 4] = ["LICENSE", "LICENSE.txt", "LICENSE.rst", "COPYING.BSD"];

/// Walk the tree under `root` and emit one [`Candidate`] per directory that
/// carries a recognized license file. Directories without one yield nothing
/// but are still descended into. Unreadable paths are skipped with a warning;
/// the walk continues elsewhere.
pub fn scan(root: &Path) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("  {} skipping unreadable path: {}", "warning:".yellow(), err);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Some(candidate) = find_license_file(entry.path()) {
            candidates.push(candidate);
        }
    }

    candidates
}

/// Intersect the regular file names in `dir` with [`LICENSE_FILE_NAMES`] and
/// build a [`Candidate`] from the highest-priority match, if any.
fn find_license_file(dir: &Path) -> Option<Candidate> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!(
                "  {} cannot read directory {}: {}",
                "warning:".yellow(),
                dir.display(),
                err
            );
            return None;
        }
    };

    let file_names: HashSet<OsString> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name())
        .collect();

    LICENSE_FILE_NAMES
        .iter()
        .find(|name| file_names.contains(OsStr::new(name)))
        .map(|name| Candidate {
            component_root: dir.to_path_buf(),
            license_file: dir.join(name),
        })
}
