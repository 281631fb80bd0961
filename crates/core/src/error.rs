//! Error types for mc-core
//!
//! Only configuration lookup can fail in normal use. The remaining variants
//! belong to the strict constructors; the boolean predicates never error.

use thiserror::Error;

/// Result type alias for mc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mc-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The platform could not supply a home or profile directory
    #[error("Unable to determine home directory")]
    HomeResolution,

    /// Alias name does not match the alias grammar
    #[error("Invalid alias name: {0}")]
    InvalidAlias(String),

    /// Access permission is not one of the recognized values
    #[error("Invalid access permission: {0}")]
    InvalidPermission(String),

    /// Duration is negative and cannot be humanized
    #[error("Negative duration: {0}")]
    NegativeDuration(String),

    /// Duration components exceed their unit or overflow
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::HomeResolution => 2,       // UsageError
            Error::InvalidAlias(_) => 2,      // UsageError
            Error::InvalidPermission(_) => 2, // UsageError
            Error::NegativeDuration(_) => 1,  // GeneralError
            Error::InvalidDuration(_) => 1,   // GeneralError
        }
    }
}
