// ============================================================================
// mediacheck-cli/src/lib.rs
// ============================================================================
//
// MEDIACHECK CLI LIBRARY: Modules behind the `mediacheck` binary
//
// - cli: argument definitions (clap)
// - commands: the check command
// - logging: env_logger setup
// - terminal: console progress reporter

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

pub use cli::Cli;
pub use commands::check::run_check;
pub use terminal::TerminalReporter;
