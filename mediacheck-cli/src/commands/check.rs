// ============================================================================
// mediacheck-cli/src/commands/check.rs
// ============================================================================
//
// CHECK COMMAND: Scan a directory and report media integrity
//
// Flow:
// 1. Build a CheckConfig from the parsed arguments
// 2. Run the checks with a TerminalReporter for live progress
// 3. Print the summary block
// 4. Either save the full report to a file or print the detail table

use std::path;

use mediacheck_core::{CheckConfig, CheckConfigBuilder, MediaCheckers, RunSummary, run_checks};

use crate::cli::Cli;
use crate::error::CliResult;
use crate::terminal::TerminalReporter;

/// Builds the core configuration from command-line arguments.
pub fn config_from_args(args: &Cli) -> CheckConfig {
    let mut builder = CheckConfigBuilder::new()
        .target_dir(args.dir.clone())
        .recursive(args.recursive)
        .probe_duration(!args.no_probe);
    if let Some(report) = &args.report {
        builder = builder.report_file(report.clone());
    }
    builder.build()
}

/// Runs the check command. Returns the summary, or `None` when no media
/// files were found.
pub fn run_check(args: &Cli) -> CliResult<Option<RunSummary>> {
    let config = config_from_args(args);
    let checkers = MediaCheckers::from_config(&config);
    let reporter = TerminalReporter::new();

    let (config, summary) = run_checks(config, &checkers, &reporter)?;
    if summary.total == 0 {
        return Ok(None);
    }

    println!();
    for line in summary.summary_lines() {
        println!("{line}");
    }

    match &config.report_file {
        Some(report_path) => {
            summary.write_report(report_path)?;
            let shown = path::absolute(report_path).unwrap_or_else(|_| report_path.clone());
            println!("Full report saved to: {}", shown.display());
        }
        None => {
            for line in summary.detail_lines() {
                println!("{line}");
            }
        }
    }

    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn config_carries_every_flag() {
        let cli = Cli::try_parse_from([
            "mediacheck",
            "--dir",
            "media",
            "-r",
            "--report",
            "r.txt",
            "--no-probe",
        ])
        .unwrap();
        let config = config_from_args(&cli);
        assert_eq!(config.target_dir, PathBuf::from("media"));
        assert!(config.recursive);
        assert_eq!(config.report_file, Some(PathBuf::from("r.txt")));
        assert!(!config.probe_duration);
    }
}
