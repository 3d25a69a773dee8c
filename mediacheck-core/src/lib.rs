//! Core library for checking the integrity of image and video files.
//!
//! This crate provides media file discovery, per-file integrity checks for
//! images (via the `image` crate) and videos (via ffprobe and ffmpeg), and
//! the text report summarising a run.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediacheck_core::{CheckConfig, MediaCheckers, NullReporter, run_checks};
//! use std::path::PathBuf;
//!
//! let config = CheckConfig::new(PathBuf::from("/path/to/media"));
//! let checkers = MediaCheckers::from_config(&config);
//!
//! let (config, summary) = run_checks(config, &checkers, &NullReporter).unwrap();
//! println!(
//!     "{}: {} ok, {} corrupt",
//!     config.target_dir.display(),
//!     summary.ok_count,
//!     summary.error_count
//! );
//! ```

pub mod check;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod reporting;
pub mod utils;

// Re-exports for public API
pub use check::{CheckOutcome, ImageChecker, IntegrityCheck, MediaCheckers, VideoChecker};
pub use config::{CheckConfig, CheckConfigBuilder};
pub use discovery::{MediaKind, find_media_files};
pub use error::{CoreError, CoreResult};
pub use processing::{check_files, run_checks};
pub use reporting::{CheckResult, NullReporter, Reporter, RunSummary};
pub use utils::{display_path, truncate_chars};
