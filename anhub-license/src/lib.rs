//! HWID handling and preview-key derivation for the ANHub key system.
//!
//! This crate covers the client-side half of the key workflow:
//! - HWID input validation (trim + minimum length)
//! - Deterministic preview-key derivation from a validated HWID
//! - Local device fingerprinting to prefill the HWID input
//!
//! # Design Principles
//!
//! - **Validate once**: a [`Hwid`] is always valid by construction; every
//!   downstream component takes a `Hwid`, never a raw string
//! - **Preview only**: the derived key is a display value with no
//!   cryptographic weight; actual registration happens out of band
//! - **Deterministic**: identical HWID input always yields the identical key
//!
//! # Key Format
//!
//! Keys are formatted as: `ANHUB_` + 12-character uppercase-hex digest of a
//! salted 32-bit rolling hash over the HWID.

mod device;
mod error;
mod hwid;
mod key;

pub use device::local_hwid;
pub use error::{LicenseError, LicenseResult};
pub use hwid::{Hwid, MIN_HWID_LEN};
pub use key::{PreviewKey, DIGEST_LEN, KEY_PREFIX};
