// ============================================================================
// mediacheck-cli/src/main.rs
// ============================================================================
//
// MEDIACHECK CLI: Main entry point for the mediacheck binary
//
// Parses the arguments, initialises logging and runs the directory check.
// Fatal errors (an invalid directory, an unwritable report) are printed to
// stderr and exit with status 1. Corrupt media files are not fatal.

use clap::Parser;
use console::style;
use mediacheck_cli::{Cli, logging, run_check};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run_check(&cli) {
        Ok(Some(summary)) => {
            log::debug!("{} of {} files corrupt", summary.error_count, summary.total);
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red().bold());
            process::exit(1);
        }
    }
}
