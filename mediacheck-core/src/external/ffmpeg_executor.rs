// ============================================================================
// mediacheck-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Video Decode Capability Backed by FFmpeg
//
// This module provides the video decode capability used by the video checker.
// It wraps ffmpeg-sidecar behind two layers of traits:
//
// - FfmpegSpawner / FfmpegProcess: spawning ffmpeg and consuming its events
// - VideoDecoder / VideoCapture: opening a file, reading its properties,
//   reading single frames by index, and releasing the handle
//
// The SidecarDecoder implementation opens a file by letting ffmpeg parse the
// container (stream dimensions, frame rate, duration) and reads a frame by
// seeking to its timestamp and decoding one raw frame to a pipe.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_failed_error("ffmpeg (sidecar - get iter)", ExitStatus::default(), e.to_string())
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_start_error("ffmpeg (sidecar wait)", e))
    }
}

impl Drop for SidecarProcess {
    fn drop(&mut self) {
        // A process abandoned mid-stream must not outlive the check.
        if let Ok(None) = self.0.as_inner_mut().try_wait() {
            let _ = self.0.kill();
            let _ = self.0.wait();
        }
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Video Decode Capability ---

/// Structural properties of an opened video.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VideoProperties {
    pub frame_count: i64,
    pub fps: f64,
    pub width: i64,
    pub height: i64,
}

/// A decoded frame as returned by [`VideoCapture::read_frame_at`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    pub index: i64,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// An opened video whose frames can be read by index.
pub trait VideoCapture {
    /// Properties read when the video was opened.
    fn properties(&self) -> VideoProperties;

    /// Seeks to frame `index` and decodes it.
    ///
    /// Returns `Ok(None)` when the decoder ran but produced no frame.
    fn read_frame_at(&mut self, index: i64) -> CoreResult<Option<DecodedFrame>>;

    /// Releases any resources held by the capture. Must be idempotent.
    fn release(&mut self);
}

/// Something that can open a video file for frame-level inspection.
pub trait VideoDecoder {
    type Capture: VideoCapture;

    /// Opens `path`, failing with an error if the file cannot be demuxed.
    fn open(&self, path: &Path) -> CoreResult<Self::Capture>;
}

/// `VideoDecoder` that drives ffmpeg through a [`FfmpegSpawner`].
#[derive(Debug, Clone, Default)]
pub struct SidecarDecoder<S: FfmpegSpawner = SidecarSpawner> {
    spawner: S,
}

impl SidecarDecoder<SidecarSpawner> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: FfmpegSpawner + Clone> SidecarDecoder<S> {
    pub fn with_spawner(spawner: S) -> Self {
        Self { spawner }
    }
}

impl<S: FfmpegSpawner + Clone> VideoDecoder for SidecarDecoder<S> {
    type Capture = SidecarCapture<S>;

    fn open(&self, path: &Path) -> CoreResult<Self::Capture> {
        // Surface not-found and permission errors as plain I/O errors before
        // ffmpeg gets a chance to report them as generic open failures.
        File::open(path)?;

        let mut cmd = FfmpegCommand::new();
        cmd.hide_banner();
        cmd.input(path.to_string_lossy().as_ref());
        cmd.frames(1);
        cmd.format("null");
        cmd.output("-");
        log::debug!("Opening video with ffmpeg: {:?}", cmd);

        let mut process = self.spawner.spawn(cmd)?;
        let mut width = 0i64;
        let mut height = 0i64;
        let mut fps = 0f64;
        let mut duration = 0f64;
        let mut found_video = false;
        let mut last_error: Option<String> = None;

        process.handle_events(|event| {
            match event {
                FfmpegEvent::ParsedInputStream(stream) => {
                    if let Some(video) = stream.video_data() {
                        if !found_video {
                            found_video = true;
                            width = i64::from(video.width);
                            height = i64::from(video.height);
                            fps = f64::from(video.fps);
                        }
                    }
                }
                FfmpegEvent::ParsedDuration(parsed) => {
                    if parsed.input_index == 0 {
                        duration = parsed.duration;
                    }
                }
                FfmpegEvent::Error(message) => last_error = Some(message),
                _ => {}
            }
            Ok(())
        })?;
        process.wait()?;

        if !found_video {
            return Err(CoreError::VideoOpen(last_error.unwrap_or_else(|| {
                format!("no video stream found in {}", path.display())
            })));
        }

        let properties = VideoProperties {
            frame_count: estimate_frame_count(duration, fps),
            fps,
            width,
            height,
        };
        log::debug!("Opened {}: {:?}", path.display(), properties);

        Ok(SidecarCapture {
            spawner: self.spawner.clone(),
            path: path.to_path_buf(),
            properties,
            released: false,
        })
    }
}

/// Frame count derived from container duration and frame rate.
///
/// ffmpeg's `Duration:` line covers the whole container, audio included, and
/// ffmpeg-sidecar exposes no per-stream duration or frame count. When the
/// audio track outlasts the video by more than a few frames this estimate
/// overshoots, and a seek near the estimated end lands past the last video
/// frame, so the tail sample of such a file reads no frame.
pub fn estimate_frame_count(duration_secs: f64, fps: f64) -> i64 {
    if duration_secs.is_finite() && fps.is_finite() && duration_secs > 0.0 && fps > 0.0 {
        (duration_secs * fps).floor() as i64
    } else {
        0
    }
}

/// Capture handle produced by [`SidecarDecoder`].
pub struct SidecarCapture<S: FfmpegSpawner> {
    spawner: S,
    path: PathBuf,
    properties: VideoProperties,
    released: bool,
}

impl<S: FfmpegSpawner> VideoCapture for SidecarCapture<S> {
    fn properties(&self) -> VideoProperties {
        self.properties
    }

    fn read_frame_at(&mut self, index: i64) -> CoreResult<Option<DecodedFrame>> {
        if self.released {
            return Err(CoreError::VideoOpen(format!(
                "capture for {} already released",
                self.path.display()
            )));
        }

        let position = index as f64 / self.properties.fps;
        let mut cmd = FfmpegCommand::new();
        cmd.hide_banner();
        cmd.seek(format!("{position:.3}"));
        cmd.input(self.path.to_string_lossy().as_ref());
        cmd.frames(1);
        cmd.rawvideo();
        log::debug!("Reading frame {} of {}: {:?}", index, self.path.display(), cmd);

        let mut process = self.spawner.spawn(cmd)?;
        let mut frame: Option<DecodedFrame> = None;
        let mut last_error = String::new();

        process.handle_events(|event| {
            match event {
                FfmpegEvent::OutputFrame(out) if frame.is_none() => {
                    frame = Some(DecodedFrame {
                        index,
                        width: out.width,
                        height: out.height,
                        data: out.data,
                    });
                }
                FfmpegEvent::Error(message) => last_error = message,
                _ => {}
            }
            Ok(())
        })?;
        let status = process.wait()?;

        if frame.is_none() && !status.success() {
            return Err(command_failed_error("ffmpeg (frame read)", status, last_error));
        }
        Ok(frame)
    }

    fn release(&mut self) {
        if !self.released {
            log::debug!("Releasing capture for {}", self.path.display());
            self.released = true;
        }
    }
}
