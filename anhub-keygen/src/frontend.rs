//! Frontend seam.
//!
//! The flow reports everything the user should see through this trait; the
//! terminal implementation lives here, tests use a recording fake.

use anhub_license::PreviewKey;
use tracing::warn;

/// Category of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral progress information.
    Info,
    /// A step completed.
    Success,
    /// A recoverable problem; the message says what to do.
    Error,
}

/// Everything the flow shows to the user.
///
/// Status messages are transient: frontends with a persistent surface should
/// clear them after [`FlowConfig::status_duration`](crate::FlowConfig);
/// line-oriented frontends just print them.
pub trait Frontend {
    /// Shows a transient status message.
    fn status(&self, kind: StatusKind, message: &str);

    /// Draws attention to the input control (the original UI wiggled it).
    fn shake(&self);

    /// Displays a freshly derived preview key.
    fn show_key(&self, key: &PreviewKey);

    /// Enables or disables the trigger control.
    fn set_busy(&self, busy: bool);

    /// Opens `url` in a new browsing context (or shows it for manual use).
    fn open_url(&self, url: &str);

    /// Reports one ledger check starting.
    fn poll_progress(&self, attempt: u32, max: u32);

    /// Activation confirmed; celebrate.
    fn celebrate(&self);
}

/// Line-oriented terminal frontend.
pub struct ConsoleFrontend {
    /// When false, registration URLs are printed instead of opened.
    open_browser: bool,
}

impl ConsoleFrontend {
    /// Creates a console frontend.
    pub fn new(open_browser: bool) -> Self {
        Self { open_browser }
    }
}

impl Frontend for ConsoleFrontend {
    fn status(&self, kind: StatusKind, message: &str) {
        match kind {
            StatusKind::Info => println!("  {message}"),
            StatusKind::Success => println!("  + {message}"),
            StatusKind::Error => eprintln!("  ! {message}"),
        }
    }

    fn shake(&self) {
        eprintln!("  ! ^ the HWID field needs input");
    }

    fn show_key(&self, key: &PreviewKey) {
        println!();
        println!("  Your key: {key}");
        println!();
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("  processing...");
        }
    }

    fn open_url(&self, url: &str) {
        if self.open_browser {
            match open::that(url) {
                Ok(()) => return,
                Err(err) => warn!(error = %err, "failed to open browser"),
            }
        }
        println!("  Open this page to register:");
        println!("  {url}");
    }

    fn poll_progress(&self, attempt: u32, max: u32) {
        println!("  checking ledger ({attempt}/{max})...");
    }

    fn celebrate(&self) {
        println!();
        println!("  ========================================");
        println!("    ACTIVATED: your key is registered");
        println!("  ========================================");
        println!();
    }
}
