//! Preview-key derivation.
//!
//! The key shown to the user is derived locally from the HWID with a salted
//! 32-bit rolling hash (djb2, multiply-by-33-plus-add, seed 5381) computed
//! over the UTF-16 code units of `hwid + salt`. The final signed word's
//! absolute value is rendered as fixed-width uppercase hex.
//!
//! This is a display/preview value only. It carries no signature and must
//! never be treated as a security token: the activation ledger, not the key,
//! decides whether an HWID is registered.

use crate::hwid::Hwid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constant prefix of every preview key.
pub const KEY_PREFIX: &str = "ANHUB_";

/// Fixed width of the hex digest portion of a key.
pub const DIGEST_LEN: usize = 12;

/// Salt appended to the HWID before hashing.
const KEY_SALT: &str = "WINDUI_SECRET_SALT_2025";

/// djb2 seed.
const HASH_SEED: i32 = 5381;

/// A locally derived, display-only license key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewKey(String);

impl PreviewKey {
    /// Derives the preview key for an HWID.
    ///
    /// Pure and total: identical input always yields the identical key.
    #[must_use]
    pub fn derive(hwid: &Hwid) -> Self {
        let salted = format!("{}{}", hwid.as_str(), KEY_SALT);
        let digest = rolling_hash(&salted);
        Self(format!("{KEY_PREFIX}{digest:0width$X}", width = DIGEST_LEN))
    }

    /// Returns the full key string (prefix + digest).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the hex digest portion (without the prefix).
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.0[KEY_PREFIX.len()..]
    }
}

impl fmt::Display for PreviewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 32-bit rolling hash over the UTF-16 code units of `input`.
///
/// All arithmetic wraps in signed 32-bit space; the result is the absolute
/// value of the final word.
fn rolling_hash(input: &str) -> u32 {
    let mut hash = HASH_SEED;
    for unit in input.encode_utf16() {
        hash = hash.wrapping_mul(33).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
