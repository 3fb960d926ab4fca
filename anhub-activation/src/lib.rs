//! Out-of-band activation for the ANHub key system.
//!
//! Registration and activation never talk to a dedicated server. Instead:
//! - **Registration** is a pre-filled issue-creation URL on the public
//!   tracker; the user submits the issue in their browser.
//! - **Activation** is detected by polling a plaintext file in the
//!   repository (the "ledger") until the HWID shows up in it.
//!
//! The poller is an explicit, cancelable session: starting a new session
//! supersedes the old one, and a superseded session's results are discarded
//! no matter when they arrive.

mod error;
mod ledger;
mod poller;
mod registration;

pub use error::{ActivationError, ActivationResult};
pub use ledger::{LedgerClient, LedgerConfig};
pub use poller::{ActivationPoller, PollConfig, PollEvent, PollSession, PollState};
pub use registration::{registration_url, IssueTracker};
