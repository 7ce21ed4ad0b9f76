//! `license-bundlr` — scan a source tree for bundled third-party licenses and
//! emit a consolidated report.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Walk the tree for license file candidates ([`scanner`]).
//! 3. Classify each candidate and merge records by component name
//!    ([`license`], [`aggregator`]).
//! 4. Resolve the output destination (`--out-file`, then
//!    `LICENSE_BUNDLR_OUT_FILE`, then `<path>/LICENSES_BUNDLED.txt`).
//! 5. Render the requested report format ([`report`]).
//!
//! Per-candidate and per-directory failures are surfaced as warnings and never
//! abort the run; an unwritable output destination is fatal.

mod aggregator;
mod cli;
mod license;
mod models;
mod report;
mod scanner;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::{Cli, ReportFormat, OUT_FILE_ENV};
use license::classifier::UNKNOWN_LICENSE;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve scan root
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let candidates = scanner::scan(&path);
    let collected = aggregator::aggregate(&candidates);

    // Flag beats environment beats default
    let out_file = cli
        .out_file
        .or_else(|| std::env::var_os(OUT_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| path.join("LICENSES_BUNDLED.txt"));

    if !cli.quiet {
        eprintln!(
            "  {} writing bundled licenses to {}",
            "→".cyan(),
            out_file.display()
        );
    }

    let file = File::create(&out_file)
        .with_context(|| format!("cannot write report to {}", out_file.display()))?;
    let mut out = BufWriter::new(file);

    match cli.report {
        ReportFormat::Text => report::text::render(&collected, &mut out, cli.include_files)?,
        ReportFormat::Json => serde_json::to_writer_pretty(&mut out, &collected)?,
    }

    out.flush()
        .with_context(|| format!("cannot write report to {}", out_file.display()))?;

    if !cli.quiet {
        let unknown = collected
            .values()
            .filter(|record| record.license == UNKNOWN_LICENSE)
            .count();
        eprintln!(
            "  {} {} components from {} license files ({} unrecognized)",
            "✓".green(),
            collected.len(),
            candidates.len(),
            unknown
        );
    }

    Ok(())
}
