//! Report renderers for the aggregated license table.
//!
//! - [`text`] — the consolidated `LICENSES_BUNDLED.txt` format, optionally
//!   embedding the raw text of every referenced license file.
//! - JSON output is rendered inline in `main` via `serde_json`.

pub mod text;
