// ============================================================================
// mediacheck-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CheckConfig
//
// Fluent construction of CheckConfig instances with defaults for every
// optional setting. Validation of the target directory is left to
// CheckConfig::validate so it runs once, right before a scan starts.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CheckConfig;

/// Builder for creating CheckConfig instances.
///
/// # Examples
///
/// ```rust
/// use mediacheck_core::config::CheckConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CheckConfigBuilder::new()
///     .target_dir(PathBuf::from("/media/library"))
///     .recursive(true)
///     .probe_duration(false)
///     .build();
///
/// assert!(config.recursive);
/// assert!(!config.probe_duration);
/// ```
#[derive(Debug, Clone)]
pub struct CheckConfigBuilder {
    target_dir: Option<PathBuf>,
    recursive: bool,
    report_file: Option<PathBuf>,
    probe_duration: bool,
}

impl Default for CheckConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckConfigBuilder {
    /// Creates a new CheckConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            target_dir: None,
            recursive: false,
            report_file: None,
            probe_duration: true,
        }
    }

    /// Sets the directory to scan. Defaults to the current directory.
    pub fn target_dir(mut self, target_dir: PathBuf) -> Self {
        self.target_dir = Some(target_dir);
        self
    }

    /// Sets whether subdirectories are scanned.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets the file the full report is written to.
    pub fn report_file(mut self, report_file: PathBuf) -> Self {
        self.report_file = Some(report_file);
        self
    }

    /// Sets whether ffprobe is queried for video durations.
    pub fn probe_duration(mut self, enable: bool) -> Self {
        self.probe_duration = enable;
        self
    }

    /// Builds the CheckConfig instance.
    pub fn build(self) -> CheckConfig {
        CheckConfig {
            target_dir: self.target_dir.unwrap_or_else(|| PathBuf::from(".")),
            recursive: self.recursive,
            report_file: self.report_file,
            probe_duration: self.probe_duration,
        }
    }
}
