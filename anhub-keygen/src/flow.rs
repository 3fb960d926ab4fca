//! The key workflow state machine.
//!
//! One `KeyFlow` owns everything one run of the widget owned as globals in
//! the original page: the displayed key, the current phase, and the active
//! poll session. Nothing here is module-global, so flows can run in
//! isolation (and several can run side by side in tests).

use crate::clipboard::ClipboardAccess;
use crate::frontend::{Frontend, StatusKind};
use anhub_activation::{
    registration_url, ActivationError, ActivationPoller, ActivationResult, IssueTracker,
    PollEvent, PollSession, PollState,
};
use anhub_license::{Hwid, LicenseError, LicenseResult, PreviewKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for the user-visible flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Cosmetic pause between submitting an HWID and showing the key.
    pub processing_delay: Duration,
    /// How long transient status messages stay visible on frontends with a
    /// persistent surface.
    pub status_duration: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_secs(1),
            status_duration: Duration::from_secs(4),
        }
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// Waiting for a valid HWID.
    EnterHwid,
    /// Key derived and displayed; the trigger now means "register".
    ReadyToRegister,
    /// Registration handed to the browser; watching the ledger.
    AwaitingActivation,
}

/// Orchestrates the key workflow over a frontend and a clipboard.
pub struct KeyFlow<F: Frontend, C: ClipboardAccess> {
    config: FlowConfig,
    frontend: F,
    clipboard: C,
    tracker: IssueTracker,
    poller: ActivationPoller,
    phase: FlowPhase,
    hwid: Option<Hwid>,
    key: Option<PreviewKey>,
    session: Option<PollSession>,
}

impl<F: Frontend, C: ClipboardAccess> KeyFlow<F, C> {
    /// Creates a flow in the `EnterHwid` phase.
    pub fn new(
        config: FlowConfig,
        frontend: F,
        clipboard: C,
        tracker: IssueTracker,
        poller: ActivationPoller,
    ) -> Self {
        Self {
            config,
            frontend,
            clipboard,
            tracker,
            poller,
            phase: FlowPhase::EnterHwid,
            hwid: None,
            key: None,
            session: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// Returns the displayed key, if one has been derived.
    #[must_use]
    pub fn key(&self) -> Option<&PreviewKey> {
        self.key.as_ref()
    }

    /// Returns the accepted HWID, if one has been submitted.
    #[must_use]
    pub fn hwid(&self) -> Option<&Hwid> {
        self.hwid.as_ref()
    }

    /// Validates `raw`, derives the key, and displays it.
    ///
    /// Validation failures surface as a transient error status (plus a shake
    /// cue for an empty field) and leave the flow where it was; key
    /// derivation never runs on rejected input.
    ///
    /// # Errors
    ///
    /// Returns the validation error that was shown to the user.
    pub async fn submit(&mut self, raw: &str) -> LicenseResult<PreviewKey> {
        let hwid = match Hwid::parse(raw) {
            Ok(hwid) => hwid,
            Err(err) => {
                self.frontend.status(StatusKind::Error, &err.to_string());
                if err == LicenseError::EmptyHwid {
                    self.frontend.shake();
                }
                return Err(err);
            }
        };

        // Purely cosmetic: the original showed a spinner here.
        self.frontend.set_busy(true);
        tokio::time::sleep(self.config.processing_delay).await;

        let key = PreviewKey::derive(&hwid);
        self.frontend.show_key(&key);
        self.frontend.set_busy(false);
        self.frontend
            .status(StatusKind::Success, "Key generated! Proceed to register.");

        debug!(hwid = %hwid, key = %key, "key derived");
        self.hwid = Some(hwid);
        self.key = Some(key.clone());
        self.phase = FlowPhase::ReadyToRegister;
        Ok(key)
    }

    /// Opens the pre-filled registration issue and starts watching the
    /// ledger, superseding any earlier session.
    ///
    /// Does nothing until a key has been generated.
    pub fn register(&mut self) {
        let Some(hwid) = self.hwid.clone() else {
            return;
        };

        let url = registration_url(&self.tracker, &hwid);
        self.frontend.open_url(&url);
        self.frontend.status(
            StatusKind::Success,
            "Opening registration issue... submit it to save your key!",
        );

        self.session = Some(self.poller.start(hwid));
        self.frontend.set_busy(true);
        self.phase = FlowPhase::AwaitingActivation;
    }

    /// Follows the active poll session to its end, forwarding progress to
    /// the frontend.
    ///
    /// Returns the terminal state: `Succeeded` (celebrated) or `TimedOut`
    /// (retry offered via [`retry`](Self::retry)).
    ///
    /// # Errors
    ///
    /// Returns [`ActivationError::ChannelClosed`] if there is no active
    /// session or it was superseded mid-wait.
    pub async fn wait_for_activation(&mut self) -> ActivationResult<PollState> {
        let Some(mut session) = self.session.take() else {
            return Err(ActivationError::ChannelClosed);
        };

        loop {
            match session.next_event().await {
                Some(PollEvent::Attempt { attempt, max }) => {
                    self.frontend.poll_progress(attempt, max);
                }
                Some(PollEvent::Activated) => {
                    self.frontend.set_busy(false);
                    self.frontend.celebrate();
                    self.frontend
                        .status(StatusKind::Success, "Key activated! You're all set.");
                    return Ok(PollState::Succeeded);
                }
                Some(PollEvent::TimedOut) => {
                    self.frontend.set_busy(false);
                    self.frontend.status(
                        StatusKind::Error,
                        "Activation not detected yet. Retry once your issue is processed.",
                    );
                    return Ok(PollState::TimedOut);
                }
                None => {
                    self.frontend.set_busy(false);
                    return Err(ActivationError::ChannelClosed);
                }
            }
        }
    }

    /// Starts a fresh poll session (fresh attempt counter) after a timeout.
    pub fn retry(&mut self) {
        let Some(hwid) = self.hwid.clone() else {
            return;
        };
        self.frontend
            .status(StatusKind::Info, "Checking the ledger again...");
        self.session = Some(self.poller.start(hwid));
        self.frontend.set_busy(true);
        self.phase = FlowPhase::AwaitingActivation;
    }

    /// Reads HWID text from the clipboard.
    ///
    /// On failure the user gets a non-fatal status telling them to paste
    /// manually, and `None` is returned.
    pub fn paste_from_clipboard(&mut self) -> Option<String> {
        match self.clipboard.read_text() {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(error = %err, "clipboard read failed");
                self.frontend.status(
                    StatusKind::Error,
                    "Failed to read clipboard. Please paste manually.",
                );
                None
            }
        }
    }

    /// Copies the displayed key to the clipboard. No-op when no key is
    /// displayed.
    pub fn copy_key_to_clipboard(&mut self) {
        let Some(key) = self.key.clone() else {
            return;
        };
        match self.clipboard.write_text(key.as_str()) {
            Ok(()) => self
                .frontend
                .status(StatusKind::Success, "Key copied to clipboard!"),
            Err(err) => {
                debug!(error = %err, "clipboard write failed");
                self.frontend.status(
                    StatusKind::Error,
                    "Failed to copy. Please select the key and copy manually.",
                );
            }
        }
    }
}
