//! Exit codes for docsmith
//!
//! These exit codes let scripts and CI distinguish a failed build from a
//! misconfigured invocation.

/// Success - site built (or command completed)
pub const SUCCESS: i32 = 0;

/// Build failed - missing docs directory, unreadable source, unwritable output
pub const BUILD_FAILED: i32 = 1;

/// Tool error - configuration error or invalid invocation
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{BUILD_FAILED, TOOL_ERROR};

    /// Exit with build failure code (1)
    pub fn build_failed() -> ! {
        std::process::exit(BUILD_FAILED);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
