use std::path::PathBuf;

use serde::Serialize;

/// A directory that carries a recognized license file, as found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub component_root: PathBuf,
    pub license_file: PathBuf,
}

/// One bundled component in the final report.
///
/// `files` and `license_files` are index-aligned: `files[i]` is the component
/// root whose license file is `license_files[i]`. The `license` field never
/// changes after insertion; a root classified differently gets its own record
/// under a disambiguated key instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    pub name: String,
    pub license: String,
    pub files: Vec<PathBuf>,
    pub license_files: Vec<PathBuf>,
}
