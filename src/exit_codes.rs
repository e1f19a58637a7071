/// Exit codes for codefmt, following Ruff's convention
///
/// These exit codes allow users and CI/CD systems to distinguish between
/// different types of failures.
/// Success - input formatted (or detected) without problems
pub const SUCCESS: i32 = 0;

/// Formatting failed - the printer rejected the input
pub const FORMAT_FAILED: i32 = 1;

/// Tool error - configuration error, file access error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{FORMAT_FAILED, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with format-failed code (1)
    pub fn format_failed() -> ! {
        std::process::exit(FORMAT_FAILED);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
