//! Exit code definitions for the ocp CLI

use ocp_core::Error;

/// Exit codes for the ocp CLI application.
///
/// These codes follow a consistent convention to allow scripts and
/// automation to handle different error scenarios appropriately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// General/unspecified error, including partially failed batches
    GeneralError = 1,

    /// User input error: invalid arguments, malformed location, etc.
    UsageError = 2,

    /// Network or remote store error
    NetworkError = 3,

    /// Resource not found: container, object, or local file does not exist
    NotFound = 5,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a core error to the exit code it should terminate with
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Resolution(_) => Self::UsageError,
            Error::NotFound(_) => Self::NotFound,
            Error::Store(_) | Error::Upload(_) => Self::NetworkError,
            _ => Self::GeneralError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
