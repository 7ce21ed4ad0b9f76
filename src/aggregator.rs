use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::license::classifier::classify;
use crate::models::{Candidate, ComponentRecord};

/// Classified records keyed by display name. `BTreeMap` keeps the keys in the
/// lexicographic order the report writer emits them in.
pub type AggregateTable = BTreeMap<String, ComponentRecord>;

/// Classify every candidate's license file and merge the results by component
/// name.
///
/// A candidate whose license file cannot be read (permission, race, non-UTF-8
/// data) is dropped with a diagnostic naming the component root; processing
/// continues. A name collision with a matching license appends to the existing
/// record in arrival order; a collision with a different license inserts a new
/// record under a key embedding the root path, leaving the first record
/// untouched.
pub fn aggregate(candidates: &[Candidate]) -> AggregateTable {
    let mut collected = AggregateTable::new();

    for candidate in candidates {
        let text = match fs::read_to_string(&candidate.license_file) {
            Ok(text) => text,
            Err(err) => {
                eprintln!(
                    "  {} skipping unrecognized license file for {}: {}",
                    "warning:".yellow(),
                    candidate.component_root.display(),
                    err
                );
                continue;
            }
        };
        let license = classify(&text);
        let name = component_name(&candidate.component_root);

        // Explicit two-step lookup: existence first, then license comparison,
        // so the append-vs-disambiguate branch stays visible.
        let existing_license = collected.get(&name).map(|record| record.license.clone());
        match existing_license {
            None => {
                collected.insert(name.clone(), new_record(name, license, candidate));
            }
            Some(existing) if existing == license => {
                if let Some(record) = collected.get_mut(&name) {
                    record.files.push(candidate.component_root.clone());
                    record.license_files.push(candidate.license_file.clone());
                }
            }
            Some(_) => {
                let key = format!("{} ({})", name, candidate.component_root.display());
                collected.insert(key, new_record(name, license, candidate));
            }
        }
    }

    collected
}

fn new_record(name: String, license: String, candidate: &Candidate) -> ComponentRecord {
    ComponentRecord {
        name,
        license,
        files: vec![candidate.component_root.clone()],
        license_files: vec![candidate.license_file.clone()],
    }
}

/// The display name of a component is the last segment of its root path. A
/// root without one (e.g. `/` or `.`) falls back to the full path so the
/// record is never keyed by an empty string.
fn component_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
