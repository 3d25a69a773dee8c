//! Result aggregation and progress reporting.
//!
//! [`RunSummary`] collects results and renders the text report. The
//! [`Reporter`] trait receives progress updates while a run is in flight; the
//! CLI implements it for console output, library users can pass
//! [`NullReporter`].

pub mod summary;

pub use summary::{CheckResult, RunSummary, STATUS_CORRUPT, STATUS_OK};

use std::path::Path;

/// Batch start metadata.
#[derive(Clone, Debug)]
pub struct BatchStartInfo<'a> {
    pub directory: &'a Path,
    pub recursive: bool,
    pub total_files: usize,
}

/// Current file within a batch, 1-based.
#[derive(Clone, Debug)]
pub struct FileProgressContext<'a> {
    pub current_file: usize,
    pub total_files: usize,
    pub relative_path: &'a str,
}

/// Receives progress updates during a run.
pub trait Reporter {
    fn batch_started(&self, _info: &BatchStartInfo<'_>) {}
    fn file_started(&self, _context: &FileProgressContext<'_>) {}
    fn file_checked(&self, _context: &FileProgressContext<'_>, _result: &CheckResult) {}
    fn batch_complete(&self, _summary: &RunSummary) {}
}

/// No-op reporter that discards all updates.
pub struct NullReporter;

impl Reporter for NullReporter {}
