//! Registration URL construction.
//!
//! Registration is performed by the user in their browser: we open the issue
//! tracker's "new issue" page pre-filled with a machine-parseable title and a
//! fixed instructional body, and an out-of-band process turns submitted
//! issues into ledger entries.

use anhub_license::Hwid;
use serde::{Deserialize, Serialize};

/// Title prefix the issue processor keys on.
const TITLE_PREFIX: &str = "REGISTER_KEY: ";

/// Configuration for the issue tracker used for registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTracker {
    /// Base URL of the tracker host.
    pub base_url: String,
    /// Repository slug (`owner/name`).
    pub repo: String,
}

impl Default for IssueTracker {
    fn default() -> Self {
        Self {
            base_url: "https://github.com".to_string(),
            repo: "ANHub-Script/key-sytem".to_string(),
        }
    }
}

/// Builds the pre-filled issue-creation URL for registering an HWID.
///
/// The HWID is embedded verbatim in both the title and the body; both are
/// percent-encoded as query parameters.
#[must_use]
pub fn registration_url(tracker: &IssueTracker, hwid: &Hwid) -> String {
    let title = format!("{TITLE_PREFIX}{hwid}");
    let body = format!(
        "Action: Register New Key\nHWID: {hwid}\n\n\
         Please do not edit this issue. It will be processed automatically."
    );

    format!(
        "{}/{}/issues/new?title={}&body={}",
        tracker.base_url,
        tracker.repo,
        urlencoding::encode(&title),
        urlencoding::encode(&body)
    )
}
