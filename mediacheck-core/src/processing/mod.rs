//! Run orchestration.
//!
//! Files are checked one at a time, in scan order. Each check acquires and
//! releases its own resources, so nothing is shared between files and a
//! failing file never affects the next one.

use std::path::PathBuf;

use crate::check::MediaCheckers;
use crate::config::CheckConfig;
use crate::discovery::{MediaKind, find_media_files};
use crate::error::CoreResult;
use crate::reporting::{BatchStartInfo, CheckResult, FileProgressContext, Reporter, RunSummary};
use crate::utils::relative_display;

/// Checks every file in `files` and returns the aggregated summary.
///
/// `config.target_dir` is used to make result paths relative. Files whose
/// extension is not a supported media type are skipped.
pub fn check_files<R: Reporter + ?Sized>(
    checkers: &MediaCheckers,
    config: &CheckConfig,
    files: &[PathBuf],
    reporter: &R,
) -> RunSummary {
    let mut summary = RunSummary::new(config.target_dir.clone(), config.recursive);
    let total_files = files.len();

    reporter.batch_started(&BatchStartInfo {
        directory: &config.target_dir,
        recursive: config.recursive,
        total_files,
    });

    for (idx, path) in files.iter().enumerate() {
        let Some(kind) = MediaKind::from_path(path) else {
            log::warn!("Skipping unsupported file: {}", path.display());
            continue;
        };

        let relative_path = relative_display(path, &config.target_dir);
        let context = FileProgressContext {
            current_file: idx + 1,
            total_files,
            relative_path: &relative_path,
        };
        reporter.file_started(&context);

        let outcome = checkers.check(kind, path);
        if !outcome.ok {
            log::warn!("{} failed integrity check: {}", path.display(), outcome.message);
        }

        let result = CheckResult {
            relative_path: relative_path.clone(),
            media_type: kind,
            ok: outcome.ok,
            message: outcome.message,
        };
        reporter.file_checked(&context, &result);
        summary.record(result);
    }

    reporter.batch_complete(&summary);
    summary
}

/// Validates `config`, scans its directory and checks every media file found.
///
/// Returns the validated configuration alongside the summary so callers can
/// show the resolved directory. The only errors are fatal ones raised before
/// any file is checked.
pub fn run_checks<R: Reporter + ?Sized>(
    config: CheckConfig,
    checkers: &MediaCheckers,
    reporter: &R,
) -> CoreResult<(CheckConfig, RunSummary)> {
    let config = config.validate()?;
    let files = find_media_files(&config.target_dir, config.recursive)?;
    let summary = check_files(checkers, &config, &files, reporter);
    Ok((config, summary))
}
