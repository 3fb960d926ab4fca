//! Local device fingerprinting.
//!
//! Produces a stable HWID candidate for this machine so the input field can
//! be prefilled. The user is free to ignore it and paste an HWID from
//! whatever tool handed them one. This is a convenience, not an identity
//! check.

use sha2::{Digest, Sha256};
use std::env;

/// Number of hex characters kept from the fingerprint digest.
const FINGERPRINT_LEN: usize = 16;

/// Returns a stable HWID for the current machine.
///
/// Combines OS, architecture, hostname, machine id, and username, hashes the
/// lot with SHA-256, and renders `HW-` + the first 16 hex characters.
/// Components that cannot be read are simply skipped, so the same machine
/// yields the same value across runs and the function never fails.
#[must_use]
pub fn local_hwid() -> String {
    let components = collect_hardware_ids();
    let combined = components.join("|");

    let mut hasher = Sha256::new();
    hasher.update(combined.as_bytes());
    let hash = hasher.finalize();

    let digest = hex::encode(hash);
    format!("HW-{}", &digest[..FINGERPRINT_LEN].to_uppercase())
}

/// Collects hardware identifiers for fingerprinting.
fn collect_hardware_ids() -> Vec<String> {
    let mut ids = Vec::new();

    // OS and architecture (stable)
    ids.push(env::consts::OS.to_string());
    ids.push(env::consts::ARCH.to_string());

    // Hostname (can change but usually stable)
    ids.push(get_hostname());

    // Machine ID (platform-specific, very stable)
    if let Some(machine_id) = get_machine_id() {
        ids.push(machine_id);
    }

    // Username as fallback component
    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        ids.push(user);
    }

    ids
}

/// Gets the machine hostname.
fn get_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Gets the machine ID (platform-specific unique identifier).
fn get_machine_id() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("ioreg")
            .args(["-rd1", "-c", "IOPlatformExpertDevice"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|output| {
                output
                    .lines()
                    .find(|l| l.contains("IOPlatformUUID"))
                    .and_then(|l| l.split('"').nth(3))
                    .map(String::from)
            })
    }

    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/etc/machine-id")
            .or_else(|_| std::fs::read_to_string("/var/lib/dbus/machine-id"))
            .ok()
            .map(|s| s.trim().to_string())
    }

    #[cfg(target_os = "windows")]
    {
        None
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        None
    }
}
