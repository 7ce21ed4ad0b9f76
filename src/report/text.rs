use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::aggregator::AggregateTable;

/// Write the consolidated bundled-licenses report to `out`.
///
/// Records are emitted in sorted key order. With `include_files` set, the raw
/// text of every referenced license file is appended after the record blocks,
/// each under a dash-underlined path heading; a file that can no longer be
/// read at that point is fatal, since the report cannot be produced in full.
pub fn render<W: Write>(collected: &AggregateTable, out: &mut W, include_files: bool) -> Result<()> {
    out.write_all(b"This repository and its source distributions bundle several libraries that are \n")?;
    out.write_all(b"compatibly licensed.  We list these here.")?;

    let mut files_to_include: Vec<PathBuf> = Vec::new();
    for record in collected.values() {
        write!(
            out,
            "\n\nName: {}\nLicense: {}\nFiles: {}\n  For details, see",
            record.name,
            record.license,
            join_paths(&record.files)
        )?;
        if include_files {
            write!(out, " the files concatenated below: ")?;
            files_to_include.extend(record.license_files.iter().cloned());
        } else {
            write!(out, ": ")?;
        }
        write!(out, "{}", join_paths(&record.license_files))?;
    }

    for path in files_to_include {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("cannot embed license file {}", path.display()))?;
        let heading = path.display().to_string();
        write!(out, "\n\n{}\n{}\n{}", heading, "-".repeat(heading.len()), text)?;
    }

    Ok(())
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(",\n     ")
}
