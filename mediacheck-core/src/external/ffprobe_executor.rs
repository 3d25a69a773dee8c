//! FFprobe integration for container duration lookups.
//!
//! ffprobe is a soft dependency: when it is not installed the probe reports
//! [`ProbeOutcome::Unavailable`] and the video checker carries on with the
//! decode checks alone. Any other failure is returned as an error.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use ffprobe::{FfProbeError, ffprobe};
use std::io;
use std::path::Path;

/// Result of a successful duration probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeOutcome {
    /// The probe ran and reported this duration in seconds.
    Duration(f64),
    /// The probe tool is not available; no duration is known.
    Unavailable,
}

/// Trait for querying a media file's container duration.
pub trait DurationProbe {
    /// Probes `path` for its duration.
    ///
    /// * `Ok(ProbeOutcome::Duration(_))` - The tool ran and reported a duration
    /// * `Ok(ProbeOutcome::Unavailable)` - The tool is not installed
    /// * `Err(CoreError)` - The tool ran but failed or its output was unusable
    fn probe_duration(&self, path: &Path) -> CoreResult<ProbeOutcome>;
}

/// `DurationProbe` backed by the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl DurationProbe for CrateFfprobeExecutor {
    fn probe_duration(&self, path: &Path) -> CoreResult<ProbeOutcome> {
        log::debug!("Running ffprobe (via crate) for duration on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => {
                let raw = metadata.format.duration.as_deref().ok_or_else(|| {
                    CoreError::FfprobeParse(format!("no duration reported for {}", path.display()))
                })?;
                let duration = parse_duration(raw)?;
                log::debug!("ffprobe duration for {}: {}s", path.display(), duration);
                Ok(ProbeOutcome::Duration(duration))
            }
            Err(FfProbeError::Io(io_err)) if io_err.kind() == io::ErrorKind::NotFound => {
                log::debug!("ffprobe not found, skipping duration probe");
                Ok(ProbeOutcome::Unavailable)
            }
            Err(err) => Err(map_ffprobe_error(err)),
        }
    }
}

/// `DurationProbe` that never runs anything; used when probing is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProbe;

impl DurationProbe for DisabledProbe {
    fn probe_duration(&self, _path: &Path) -> CoreResult<ProbeOutcome> {
        Ok(ProbeOutcome::Unavailable)
    }
}

/// Parses the textual duration ffprobe prints, e.g. `"12.480000"`.
pub fn parse_duration(raw: &str) -> CoreResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| CoreError::FfprobeParse(format!("invalid duration '{}': {}", raw.trim(), e)))
}

fn map_ffprobe_error(err: FfProbeError) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error("ffprobe", io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error("ffprobe", output.status, stderr)
        }
        FfProbeError::Deserialize(err) => {
            CoreError::FfprobeParse(format!("output deserialization: {err}"))
        }
        #[allow(unreachable_patterns)]
        _ => CoreError::FfprobeParse(format!("unknown ffprobe error: {err:?}")),
    }
}
