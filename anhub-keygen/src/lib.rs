//! User-facing key workflow for the ANHub key system.
//!
//! Sequences the visible steps (validate input, derive and display the
//! preview key, hand registration to the browser, watch the ledger) and
//! keeps all terminal/clipboard I/O behind traits so the flow logic runs in
//! tests without a terminal.

mod clipboard;
mod flow;
mod frontend;

pub use clipboard::{ClipboardAccess, ClipboardError, SystemClipboard};
pub use flow::{FlowConfig, FlowPhase, KeyFlow};
pub use frontend::{ConsoleFrontend, Frontend, StatusKind};
