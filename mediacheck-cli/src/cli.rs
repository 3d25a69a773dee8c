// mediacheck-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediacheck: Media file integrity checker",
    long_about = "Scans a directory for images and videos and checks that each one \
                  decodes cleanly, has sane dimensions and matches its extension."
)]
pub struct Cli {
    /// Directory to check (defaults to the current directory)
    #[arg(long = "dir", value_name = "DIR", default_value = ".", env = "MEDIACHECK_DIR")]
    pub dir: PathBuf,

    /// Also check files in subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Optional: Save the full report to this file instead of printing the details
    #[arg(long = "report", value_name = "REPORT_FILE", env = "MEDIACHECK_REPORT")]
    pub report: Option<PathBuf>,

    /// Skip the ffprobe duration lookup for videos
    #[arg(long, default_value_t = false)]
    pub no_probe: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
