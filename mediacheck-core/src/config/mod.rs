//! Configuration structures and constants for the mediacheck-core library.
//!
//! This module defines which files are considered media, the limits used when
//! formatting diagnostics, and the run configuration consumed by
//! [`run_checks`](crate::processing::run_checks).

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::CheckConfigBuilder;

// Default constants

/// Lowercased image extensions (without the leading dot) that are checked.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Lowercased video extensions (without the leading dot) that are checked.
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "flv"];

/// Width of the path column in the report. Longer paths are shortened to
/// `...` plus their last `DISPLAY_PATH_WIDTH - 3` characters.
pub const DISPLAY_PATH_WIDTH: usize = 50;

/// Maximum characters of probe tool diagnostics kept in a message.
pub const PROBE_ERROR_LIMIT: usize = 80;

/// Maximum characters of decoder diagnostics kept in a message.
pub const DECODE_ERROR_LIMIT: usize = 100;

/// Upper bound for the middle sampled frame index.
pub const MAX_MIDDLE_SAMPLE_FRAME: i64 = 100;

/// Distance from the end of the stream for the last sampled frame.
pub const TAIL_SAMPLE_OFFSET: i64 = 5;

/// Run configuration for a single mediacheck invocation.
///
/// # Examples
///
/// ```rust,no_run
/// use mediacheck_core::config::CheckConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CheckConfigBuilder::new()
///     .target_dir(PathBuf::from("/path/to/photos"))
///     .recursive(true)
///     .report_file(PathBuf::from("report.txt"))
///     .build()
///     .validate()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Directory to scan
    pub target_dir: PathBuf,

    /// Whether subdirectories are scanned as well
    pub recursive: bool,

    /// Optional path the full report is written to
    pub report_file: Option<PathBuf>,

    /// Whether ffprobe is asked for the container duration before decoding.
    /// Disabling it behaves exactly like ffprobe not being installed.
    pub probe_duration: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            recursive: false,
            report_file: None,
            probe_duration: true,
        }
    }
}

impl CheckConfig {
    /// Creates a configuration for `target_dir` with default settings.
    pub fn new(target_dir: PathBuf) -> Self {
        Self {
            target_dir,
            ..Default::default()
        }
    }

    /// Resolves `target_dir` to an absolute path and verifies it is a directory.
    ///
    /// This is the only fatal check of a run: it happens before any file is
    /// scanned, so a failure here means no results are produced.
    pub fn validate(mut self) -> CoreResult<Self> {
        let absolute = std::path::absolute(&self.target_dir)
            .map_err(|_| CoreError::InvalidDirectory(self.target_dir.clone()))?;
        if !absolute.is_dir() {
            return Err(CoreError::InvalidDirectory(absolute));
        }
        log::debug!("Validated target directory: {}", absolute.display());
        self.target_dir = absolute;
        Ok(self)
    }

    /// Human readable scan mode used in the report header.
    pub fn scan_mode(&self) -> &'static str {
        scan_mode_label(self.recursive)
    }
}

/// Label for the scan mode shown in console output and reports.
pub fn scan_mode_label(recursive: bool) -> &'static str {
    if recursive {
        "recursive"
    } else {
        "current directory only"
    }
}
