// ============================================================================
// mediacheck-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and ffmpeg
//
// This module encapsulates the external capabilities the video checker relies
// on. Each one sits behind a trait so the check policy can be exercised
// without the tools installed:
//
// - DurationProbe: container duration via ffprobe (optional at runtime)
// - VideoDecoder / VideoCapture: stream properties and frame reads via ffmpeg
// - FfmpegSpawner / FfmpegProcess: the raw ffmpeg process abstraction

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for spawning ffmpeg and decoding video frames
pub mod ffmpeg_executor;

/// Traits and implementations for probing durations with ffprobe
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

// ----- FFmpeg Execution -----
pub use ffmpeg_executor::{
    DecodedFrame, FfmpegProcess, FfmpegSpawner, SidecarCapture, SidecarDecoder, SidecarProcess,
    SidecarSpawner, VideoCapture, VideoDecoder, VideoProperties,
};

// ----- FFprobe Execution -----
pub use ffprobe_executor::{CrateFfprobeExecutor, DisabledProbe, DurationProbe, ProbeOutcome};
