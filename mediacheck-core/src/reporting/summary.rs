//! Run summary and report formatting.
//!
//! A [`RunSummary`] accumulates [`CheckResult`]s in scan order and renders the
//! fixed-layout text report: 12 header lines followed by one table row per
//! checked file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{DISPLAY_PATH_WIDTH, scan_mode_label};
use crate::discovery::MediaKind;
use crate::error::{CoreError, CoreResult};
use crate::utils::{display_path, pad_right};

/// Width of the `=` and `-` separator lines.
pub const SEPARATOR_WIDTH: usize = 80;

/// Width of the type column.
pub const TYPE_COLUMN_WIDTH: usize = 8;

/// Width of the status column.
pub const STATUS_COLUMN_WIDTH: usize = 10;

/// Number of header lines preceding the per-file rows.
pub const HEADER_LINE_COUNT: usize = 12;

/// Number of leading header lines that make up the console summary.
pub const SUMMARY_LINE_COUNT: usize = 8;

pub const STATUS_OK: &str = "✅ OK";
pub const STATUS_CORRUPT: &str = "❌ CORRUPT";

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Path relative to the scanned directory
    pub relative_path: String,
    pub media_type: MediaKind,
    pub ok: bool,
    pub message: String,
}

impl CheckResult {
    /// Status column text for this result.
    pub fn status(&self) -> &'static str {
        if self.ok { STATUS_OK } else { STATUS_CORRUPT }
    }
}

/// Aggregated results of a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub directory: PathBuf,
    pub recursive: bool,
    pub total: usize,
    pub ok_count: usize,
    pub error_count: usize,
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    pub fn new(directory: PathBuf, recursive: bool) -> Self {
        Self {
            directory,
            recursive,
            total: 0,
            ok_count: 0,
            error_count: 0,
            results: Vec::new(),
        }
    }

    /// Appends a result and updates the counters.
    pub fn record(&mut self, result: CheckResult) {
        self.total += 1;
        if result.ok {
            self.ok_count += 1;
        } else {
            self.error_count += 1;
        }
        self.results.push(result);
    }

    /// Renders the full report, one entry per line.
    pub fn report_lines(&self) -> Vec<String> {
        let equals = "=".repeat(SEPARATOR_WIDTH);
        let dashes = "-".repeat(SEPARATOR_WIDTH);

        let mut lines = vec![
            equals.clone(),
            "Media Integrity Check Report".to_string(),
            equals,
            format!("Directory: {}", self.directory.display()),
            format!("Scan mode: {}", scan_mode_label(self.recursive)),
            format!("Files checked: {}", self.total),
            format!("OK files: {}", self.ok_count),
            format!("Corrupt files: {}", self.error_count),
            "Details:".to_string(),
            dashes.clone(),
            table_row("Path", "Type", "Status", "Message"),
            dashes,
        ];

        lines.extend(self.results.iter().map(|result| {
            table_row(
                &display_path(&result.relative_path, DISPLAY_PATH_WIDTH),
                result.media_type.label(),
                result.status(),
                &result.message,
            )
        }));
        lines
    }

    /// The summary block printed to the console after a run.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = self.report_lines();
        lines.truncate(SUMMARY_LINE_COUNT);
        lines
    }

    /// The detail block: everything after the summary.
    pub fn detail_lines(&self) -> Vec<String> {
        self.report_lines().split_off(SUMMARY_LINE_COUNT)
    }

    /// Full report text, lines joined with `\n`.
    pub fn render(&self) -> String {
        self.report_lines().join("\n")
    }

    /// Writes the full report to `path` in a single write.
    pub fn write_report(&self, path: &Path) -> CoreResult<()> {
        fs::write(path, self.render()).map_err(|e| CoreError::ReportWrite(path.to_path_buf(), e))?;
        log::debug!("Report written to {}", path.display());
        Ok(())
    }
}

fn table_row(path: &str, media_type: &str, status: &str, message: &str) -> String {
    format!(
        "{} {} {} {}",
        pad_right(path, DISPLAY_PATH_WIDTH),
        pad_right(media_type, TYPE_COLUMN_WIDTH),
        pad_right(status, STATUS_COLUMN_WIDTH),
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(path: &str, kind: MediaKind, ok: bool) -> CheckResult {
        CheckResult {
            relative_path: path.to_string(),
            media_type: kind,
            ok,
            message: if ok { "fine".into() } else { "broken".into() },
        }
    }

    fn sample_summary() -> RunSummary {
        let mut summary = RunSummary::new(PathBuf::from("/media"), true);
        summary.record(result("a.png", MediaKind::Image, true));
        summary.record(result("b.mp4", MediaKind::Video, false));
        summary.record(result("c.jpg", MediaKind::Image, true));
        summary
    }

    #[test]
    fn counts_add_up() {
        let summary = sample_summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.ok_count, 2);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.total, summary.ok_count + summary.error_count);
    }

    #[test]
    fn report_has_header_plus_one_line_per_result() {
        let summary = sample_summary();
        assert_eq!(summary.report_lines().len(), HEADER_LINE_COUNT + 3);
        assert_eq!(summary.render().lines().count(), HEADER_LINE_COUNT + 3);
    }

    #[test]
    fn header_shows_directory_mode_and_totals() {
        let lines = sample_summary().report_lines();
        assert_eq!(lines[0], "=".repeat(80));
        assert_eq!(lines[3], "Directory: /media");
        assert_eq!(lines[4], "Scan mode: recursive");
        assert_eq!(lines[5], "Files checked: 3");
        assert_eq!(lines[6], "OK files: 2");
        assert_eq!(lines[7], "Corrupt files: 1");
    }

    #[test]
    fn rows_preserve_scan_order_and_column_layout() {
        let lines = sample_summary().report_lines();
        let row = &lines[HEADER_LINE_COUNT + 1];
        assert!(row.starts_with("b.mp4 "));
        assert_eq!(row.chars().nth(DISPLAY_PATH_WIDTH + 1), Some('V'));
        assert!(row.contains(STATUS_CORRUPT));
        assert!(row.ends_with(" broken"));
    }

    #[test]
    fn long_paths_are_shortened() {
        let mut summary = RunSummary::new(PathBuf::from("/media"), false);
        let long = format!("{}/{}", "d".repeat(40), "f".repeat(30));
        summary.record(result(&long, MediaKind::Image, true));
        let row = summary.report_lines().pop().unwrap();
        assert!(row.starts_with("..."));
        assert_eq!(&row[3..50], &long[long.len() - 47..]);
    }

    #[test]
    fn summary_and_details_split_the_report() {
        let summary = sample_summary();
        let mut joined = summary.summary_lines();
        joined.extend(summary.detail_lines());
        assert_eq!(joined, summary.report_lines());
        assert_eq!(summary.summary_lines().len(), SUMMARY_LINE_COUNT);
    }

    #[test]
    fn write_report_fails_for_missing_parent() {
        let summary = sample_summary();
        let path = Path::new("surely/missing/dir/report.txt");
        assert!(matches!(
            summary.write_report(path),
            Err(CoreError::ReportWrite(_, _))
        ));
    }
}
