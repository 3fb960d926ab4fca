//! Clipboard seam.
//!
//! Clipboard access is gated by platform permission and can fail for a dozen
//! environment reasons (headless session, Wayland portal, denied access).
//! Every failure is recoverable: the user can always type or select manually.

use thiserror::Error;

/// Clipboard access failed; manual entry is the fallback.
#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Read/write access to the system clipboard.
pub trait ClipboardAccess {
    /// Reads the current clipboard text.
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    /// Replaces the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard.
///
/// A fresh handle is opened per operation; some platforms invalidate handles
/// that outlive the window/session that created them.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.get_text())
            .map_err(|err| ClipboardError(err.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|err| ClipboardError(err.to_string()))
    }
}
