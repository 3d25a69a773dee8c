// ============================================================================
// mediacheck-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias shared by the command implementations
//
// The CLI reports core errors as-is; main prints them and exits with status 1.

use mediacheck_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;
