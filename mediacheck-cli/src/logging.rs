// ============================================================================
// mediacheck-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI
//
// Library code logs through the `log` facade. The CLI routes those records
// to stderr with env_logger so they never interleave with the report on
// stdout:
// - default: warn (skipped entries and per-file failures)
// - --verbose: debug (external commands, probe results, decode steps)
// - RUST_LOG overrides both

use log::LevelFilter;

/// Log level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialises env_logger. Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .try_init();
    log::debug!("Logger initialized with level: {}", default_level(verbose));
}
