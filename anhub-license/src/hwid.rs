//! Validated hardware-identifier input.
//!
//! An [`Hwid`] is an opaque, user-provided string. The only structure we
//! impose is a minimum length after trimming; everything else (format,
//! provenance) is the user's business. All downstream components take a
//! `Hwid`, so validation happens exactly once, at the input boundary.

use crate::error::{LicenseError, LicenseResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum accepted HWID length (UTF-16 code units) after trimming.
pub const MIN_HWID_LEN: usize = 5;

/// A validated hardware identifier.
///
/// Length is measured in UTF-16 code units, the same view of the string the
/// key derivation hashes over, so validation and hashing agree on what a
/// "character" is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hwid(String);

impl Hwid {
    /// Parses and validates raw HWID input.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::EmptyHwid`] if nothing remains after trimming,
    /// or [`LicenseError::HwidTooShort`] if fewer than [`MIN_HWID_LEN`]
    /// code units remain.
    pub fn parse(raw: &str) -> LicenseResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(LicenseError::EmptyHwid);
        }

        let len = trimmed.encode_utf16().count();
        if len < MIN_HWID_LEN {
            return Err(LicenseError::HwidTooShort {
                len,
                min: MIN_HWID_LEN,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Hwid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hwid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Hwid {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
