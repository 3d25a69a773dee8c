//! Per-file integrity checks.
//!
//! Every supported media kind has one [`IntegrityCheck`] implementation.
//! Checks never fail with an error: whatever goes wrong while inspecting a
//! file becomes a failing [`CheckOutcome`] with a readable message, so one
//! broken file cannot stop a scan.

pub mod image;
pub mod video;

use std::io;
use std::path::Path;

use crate::config::{CheckConfig, DECODE_ERROR_LIMIT};
use crate::discovery::MediaKind;
use crate::error::CoreError;
use crate::external::{CrateFfprobeExecutor, DisabledProbe, SidecarDecoder};
use crate::utils::truncate_chars;

pub use self::image::ImageChecker;
pub use self::video::{ReleaseGuard, VideoChecker};

/// Verdict of a single integrity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub ok: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// An integrity check for one kind of media file.
pub trait IntegrityCheck {
    fn check(&self, path: &Path) -> CheckOutcome;
}

impl<T: IntegrityCheck + ?Sized> IntegrityCheck for Box<T> {
    fn check(&self, path: &Path) -> CheckOutcome {
        (**self).check(path)
    }
}

/// The checker set used by a run, one per [`MediaKind`].
pub struct MediaCheckers {
    image: Box<dyn IntegrityCheck>,
    video: Box<dyn IntegrityCheck>,
}

impl MediaCheckers {
    pub fn new(image: Box<dyn IntegrityCheck>, video: Box<dyn IntegrityCheck>) -> Self {
        Self { image, video }
    }

    /// Builds the production checkers. The ffprobe duration step is skipped
    /// when `config.probe_duration` is false.
    pub fn from_config(config: &CheckConfig) -> Self {
        let video: Box<dyn IntegrityCheck> = if config.probe_duration {
            Box::new(VideoChecker::new(CrateFfprobeExecutor::new(), SidecarDecoder::new()))
        } else {
            Box::new(VideoChecker::new(DisabledProbe, SidecarDecoder::new()))
        };
        Self::new(Box::new(ImageChecker::new()), video)
    }

    /// Runs the checker matching `kind` on `path`.
    pub fn check(&self, kind: MediaKind, path: &Path) -> CheckOutcome {
        match kind {
            MediaKind::Image => self.image.check(path),
            MediaKind::Video => self.video.check(path),
        }
    }
}

/// Maps file access errors to their dedicated messages.
///
/// Returns `None` for errors that are not about reaching the file itself.
pub(crate) fn access_failure(err: &CoreError) -> Option<CheckOutcome> {
    match err.io_kind()? {
        io::ErrorKind::NotFound => Some(CheckOutcome::failed("file not found")),
        io::ErrorKind::PermissionDenied => {
            Some(CheckOutcome::failed("permission denied, cannot read file"))
        }
        _ => None,
    }
}

/// Failure outcome for an unexpected decode error on a file of `kind`.
pub(crate) fn decode_failure(err: &CoreError, kind: &str) -> CheckOutcome {
    access_failure(err).unwrap_or_else(|| {
        CheckOutcome::failed(format!(
            "corrupt or unsupported {kind} format: {}",
            truncate_chars(&diagnostic(err), DECODE_ERROR_LIMIT)
        ))
    })
}

/// The most specific text available for an error, without our own prefixes.
fn diagnostic(err: &CoreError) -> String {
    match err {
        CoreError::ImageDecode(e) => e.to_string(),
        CoreError::Io(e) => e.to_string(),
        other => other.to_string(),
    }
}
