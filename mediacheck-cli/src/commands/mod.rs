//! Command implementations for the CLI.

/// The directory check: scan, check every media file and report.
pub mod check;
