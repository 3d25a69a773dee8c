// ============================================================================
// mediacheck-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Console progress for a check run
//
// TerminalReporter implements the core Reporter trait and prints one status
// line per file while the run is in flight. Styling goes through the console
// crate, which drops colours when stdout is not a terminal.

use console::style;
use mediacheck_core::config::scan_mode_label;
use mediacheck_core::reporting::{BatchStartInfo, FileProgressContext};
use mediacheck_core::{CheckResult, Reporter, RunSummary};

/// Indentation for the per-file status line.
const STATUS_INDENT: &str = "     ";

/// Prints run progress to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

/// Formats the status line printed after each file.
pub fn status_line(result: &CheckResult) -> String {
    format!("{STATUS_INDENT}status: {} - {}", result.status(), result.message)
}

impl Reporter for TerminalReporter {
    fn batch_started(&self, info: &BatchStartInfo<'_>) {
        println!(
            "Scanning directory: {} ({})",
            style(info.directory.display()).bold(),
            scan_mode_label(info.recursive)
        );
        if info.total_files == 0 {
            println!("{}", style("no supported media files found").yellow());
        } else {
            println!(
                "found {} media files, starting checks...",
                style(info.total_files).bold()
            );
        }
    }

    fn file_started(&self, context: &FileProgressContext<'_>) {
        println!(
            "[{}/{}] checking: {}",
            context.current_file, context.total_files, context.relative_path
        );
    }

    fn file_checked(&self, _context: &FileProgressContext<'_>, result: &CheckResult) {
        let line = status_line(result);
        if result.ok {
            println!("{}", style(line).green());
        } else {
            println!("{}", style(line).red());
        }
    }

    fn batch_complete(&self, summary: &RunSummary) {
        log::debug!(
            "Run complete: {} checked, {} ok, {} corrupt",
            summary.total,
            summary.ok_count,
            summary.error_count
        );
    }
}
