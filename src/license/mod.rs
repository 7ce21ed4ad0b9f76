//! Heuristic license text classification.
//!
//! [`classifier`] maps the raw text of a license file to a license identifier
//! string by ordered first-match-wins rules. Unmatched text resolves to the
//! literal `"Unknown (skipped)"` rather than an error; this is a best-effort
//! matcher for a generated report, not a legal determination.

pub mod classifier;
