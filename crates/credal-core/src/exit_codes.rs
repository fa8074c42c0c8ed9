//! Exit codes for the `credal` CLI.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User errors (fix the arguments, config or data)
//! - 20-29: Internal, numeric and I/O errors

use credal_common::{Error, ErrorCategory};

/// Exit codes for credal operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    // ========================================================================
    // User Errors (10-19)
    // ========================================================================
    /// Invalid arguments
    ArgsError = 10,

    /// Invalid or unreadable configuration
    ConfigError = 11,

    /// Malformed or out-of-domain data
    DataError = 12,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal or numeric error (e.g. division by zero with s = 0)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Codes 10-19; resolved by user action.
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&self.as_i32())
    }

    /// Codes 20-29.
    pub fn is_internal_error(self) -> bool {
        self.as_i32() >= 20
    }

    /// Error code name (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::DataError => "ERR_DATA",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }

    /// Exit code for a library error.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::InvalidParameter { .. } | Error::InvalidColumn { .. } => ExitCode::ArgsError,
            Error::Config(_) => ExitCode::ConfigError,
            _ => match err.category() {
                ErrorCategory::Config => ExitCode::ConfigError,
                ErrorCategory::Data => ExitCode::DataError,
                ErrorCategory::Inference => ExitCode::InternalError,
                ErrorCategory::Io => ExitCode::IoError,
            },
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
