//! Video integrity check.
//!
//! Steps, in order:
//!
//! 1. Ask the duration probe for the container duration. A missing probe tool
//!    is not an error, but a probe that runs and reports a duration of zero or
//!    less fails the file immediately, without trying to decode it.
//! 2. Open the file with the decode capability.
//! 3. Validate frame count, frame rate and dimensions.
//! 4. Read three sample frames: the first, one from the middle (capped at
//!    frame 100) and one five frames before the end.
//!
//! The capture handle is wrapped in a [`ReleaseGuard`] so it is released on
//! every return path.

use std::ops::{Deref, DerefMut};
use std::path::Path;

use super::{CheckOutcome, IntegrityCheck, access_failure};
use crate::config::{MAX_MIDDLE_SAMPLE_FRAME, PROBE_ERROR_LIMIT, TAIL_SAMPLE_OFFSET};
use crate::external::{
    CrateFfprobeExecutor, DurationProbe, ProbeOutcome, SidecarDecoder, VideoCapture, VideoDecoder,
};
use crate::utils::truncate_chars;

/// Releases the wrapped capture when dropped.
pub struct ReleaseGuard<C: VideoCapture>(C);

impl<C: VideoCapture> ReleaseGuard<C> {
    pub fn new(capture: C) -> Self {
        Self(capture)
    }
}

impl<C: VideoCapture> Deref for ReleaseGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C: VideoCapture> DerefMut for ReleaseGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.0
    }
}

impl<C: VideoCapture> Drop for ReleaseGuard<C> {
    fn drop(&mut self) {
        self.0.release();
    }
}

/// Frame indices read by the sampled frame check.
pub fn sample_frame_indices(frame_count: i64) -> [i64; 3] {
    [
        0,
        MAX_MIDDLE_SAMPLE_FRAME.min(frame_count / 2),
        (frame_count - TAIL_SAMPLE_OFFSET).max(0),
    ]
}

/// Checks video files with a duration probe and a decode capability.
#[derive(Debug, Clone, Default)]
pub struct VideoChecker<P = CrateFfprobeExecutor, D = SidecarDecoder> {
    probe: P,
    decoder: D,
}

impl<P: DurationProbe, D: VideoDecoder> VideoChecker<P, D> {
    pub fn new(probe: P, decoder: D) -> Self {
        Self { probe, decoder }
    }

    fn inspect(&self, capture: &mut ReleaseGuard<D::Capture>, duration: f64) -> CheckOutcome {
        let props = capture.properties();

        if props.frame_count <= 0 {
            return CheckOutcome::failed(format!("invalid frame count: {}", props.frame_count));
        }
        if props.fps <= 0.0 {
            return CheckOutcome::failed(format!("invalid frame rate: {}", props.fps));
        }
        if props.width <= 0 || props.height <= 0 {
            return CheckOutcome::failed(format!(
                "invalid video dimensions: {}x{}",
                props.width, props.height
            ));
        }

        for index in sample_frame_indices(props.frame_count) {
            match capture.read_frame_at(index) {
                Ok(Some(_)) => {}
                Ok(None) => {
                    log::debug!("No frame returned at index {}", index);
                    return frame_read_failure(index);
                }
                Err(err) => {
                    log::debug!("Frame {} read error: {}", index, err);
                    return frame_read_failure(index);
                }
            }
        }

        CheckOutcome::ok(format!(
            "video OK (duration: {:.1}s, resolution: {}x{}, frames: {})",
            duration, props.width, props.height, props.frame_count
        ))
    }
}

fn frame_read_failure(index: i64) -> CheckOutcome {
    CheckOutcome::failed(format!("frame {index} read failed, video possibly corrupt"))
}

impl<P: DurationProbe, D: VideoDecoder> IntegrityCheck for VideoChecker<P, D> {
    fn check(&self, path: &Path) -> CheckOutcome {
        let duration = match self.probe.probe_duration(path) {
            Ok(ProbeOutcome::Duration(duration)) if duration <= 0.0 => {
                return CheckOutcome::failed(format!("invalid video duration: {duration}s"));
            }
            Ok(ProbeOutcome::Duration(duration)) => duration,
            Ok(ProbeOutcome::Unavailable) => 0.0,
            Err(err) => {
                log::debug!("Duration probe failed for {}: {}", path.display(), err);
                return CheckOutcome::failed(format!(
                    "probe failed: {}",
                    truncate_chars(&err.to_string(), PROBE_ERROR_LIMIT)
                ));
            }
        };

        let mut capture = match self.decoder.open(path) {
            Ok(capture) => ReleaseGuard::new(capture),
            Err(err) => {
                log::debug!("Cannot open {}: {}", path.display(), err);
                return access_failure(&err).unwrap_or_else(|| {
                    CheckOutcome::failed("cannot open video file, possibly corrupt")
                });
            }
        };

        self.inspect(&mut capture, duration)
    }
}
