//! Activation ledger client.
//!
//! The "ledger" is a plaintext file on a raw-content host, maintained out of
//! band by whoever processes registration issues. Activation for an HWID
//! means the HWID appears in that file, so the client is a GET plus a
//! substring check.

use crate::error::{ActivationError, ActivationResult};
use anhub_license::Hwid;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for the activation ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Base URL of the raw-content host.
    pub base_url: String,
    /// Repository slug (`owner/name`).
    pub repo: String,
    /// Branch the ledger file lives on.
    pub branch: String,
    /// Path of the ledger file within the repository.
    pub path: String,
    /// Per-request timeout in seconds. Matches the polling cadence so a hung
    /// fetch costs exactly one attempt.
    pub request_timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://raw.githubusercontent.com".to_string(),
            repo: "ANHub-Script/key-sytem".to_string(),
            branch: "main".to_string(),
            path: "docs/keys.txt".to_string(),
            request_timeout_secs: 5,
        }
    }
}

/// Client for reading the activation ledger.
pub struct LedgerClient {
    config: LedgerConfig,
    client: Client,
}

impl LedgerClient {
    /// Creates a new ledger client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: LedgerConfig) -> ActivationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Returns the ledger URL without the cache-buster parameter.
    #[must_use]
    pub fn ledger_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.base_url, self.config.repo, self.config.branch, self.config.path
        )
    }

    /// Fetches the current ledger body.
    ///
    /// Appends a current-millis `t` query parameter so intermediaries cannot
    /// serve a stale copy; the file changes out of band and must be read
    /// fresh on every attempt.
    ///
    /// # Errors
    ///
    /// Any non-2xx status or transport failure is an error; callers treat it
    /// as "not readable this attempt", never as terminal.
    pub async fn fetch(&self) -> ActivationResult<String> {
        let cache_buster = chrono::Utc::now().timestamp_millis();
        let url = format!("{}?t={}", self.ledger_url(), cache_buster);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ActivationError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "fetched activation ledger");
        Ok(body)
    }

    /// Checks whether the ledger currently lists `hwid`.
    ///
    /// This is a literal substring check, not a line or token lookup: an HWID
    /// that happens to be embedded in a longer token also counts. That
    /// imprecision is inherited behavior and covered by tests.
    ///
    /// # Errors
    ///
    /// Propagates [`fetch`](Self::fetch) failures.
    pub async fn is_activated(&self, hwid: &Hwid) -> ActivationResult<bool> {
        let body = self.fetch().await?;
        Ok(body.contains(hwid.as_str()))
    }
}
