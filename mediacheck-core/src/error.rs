//! Error types for the mediacheck-core library.
//!
//! Only configuration, discovery and report I/O produce `CoreError`s that
//! reach the caller. Failures while checking an individual file are folded
//! into a failing [`CheckOutcome`](crate::check::CheckOutcome) by the
//! checkers, so a single bad file never aborts a run.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Directory '{0}' does not exist or is not a valid directory")]
    InvalidDirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("{0} exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Cannot open video: {0}")]
    VideoOpen(String),

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Failed to write report to '{0}': {1}")]
    ReportWrite(PathBuf, #[source] io::Error),
}

/// Result type alias for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a [`CoreError::CommandStart`] for an external tool that could not be spawned.
pub fn command_start_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

/// Builds a [`CoreError::CommandFailed`] for an external tool that exited unsuccessfully.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(tool.into(), status, stderr.into().trim().to_string())
}

impl CoreError {
    /// Returns the kind of the I/O error raised while accessing a file, if
    /// this error wraps one.
    ///
    /// The checkers use this to tell "file not found" and "permission denied"
    /// apart from generic decode failures. `CommandStart` is not included.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            CoreError::Io(e) | CoreError::ReportWrite(_, e) => Some(e.kind()),
            CoreError::ImageDecode(image::ImageError::IoError(e)) => Some(e.kind()),
            CoreError::Walkdir(e) => e.io_error().map(io::Error::kind),
            _ => None,
        }
    }
}
