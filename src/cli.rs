use std::path::PathBuf;

use clap::Parser;

/// Environment variable consulted for the report destination when `--out-file`
/// is absent. The flag takes precedence.
pub const OUT_FILE_ENV: &str = "LICENSE_BUNDLR_OUT_FILE";

#[derive(Parser, Debug)]
#[command(
    name = "license-bundlr",
    about = "Scan a source tree for bundled third-party licenses and generate a consolidated report",
    version
)]
pub struct Cli {
    /// Directory tree to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report destination [default: <path>/LICENSES_BUNDLED.txt, overridable via LICENSE_BUNDLR_OUT_FILE]
    #[arg(long, value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Include the raw text of every matched license file in the report
    #[arg(long)]
    pub include_files: bool,

    /// Report format
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Suppress status and summary lines
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
