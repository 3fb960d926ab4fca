//! Error types for HWID validation and key derivation.

use thiserror::Error;

/// Errors produced while validating HWID input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenseError {
    /// The HWID field was empty (or whitespace only).
    #[error("please enter your HWID first")]
    EmptyHwid,

    /// The HWID is shorter than the minimum accepted length.
    #[error("invalid HWID format: too short ({len} of {min} required characters)")]
    HwidTooShort {
        /// Length of the trimmed input, in UTF-16 code units.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
