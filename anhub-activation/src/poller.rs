//! Activation poll sessions.
//!
//! After registration is handed off to the browser, activation happens out of
//! band; we find out by re-reading the ledger on a fixed cadence. Each call
//! to [`ActivationPoller::start`] creates one session: a tokio task that
//! checks the ledger up to `max_attempts` times and ends in `Succeeded` or
//! `TimedOut`.
//!
//! Only one session is current at a time. Sessions carry a monotonically
//! increasing id, and the task re-checks "am I still current" before every
//! effect, so starting a new session (or calling `cancel`) makes the old
//! task wind down at its next wake-up, and a stale fetch result is discarded
//! instead of touching shared state. Cancellation is cooperative: in-flight
//! requests are never aborted, their results just stop mattering.

use crate::ledger::LedgerClient;
use anhub_license::Hwid;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Configuration for poll sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between attempts.
    pub interval: Duration,
    /// Attempt budget per session.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        // 60 × 5 s ≈ a five-minute activation window.
        Self {
            interval: Duration::from_secs(5),
            max_attempts: 60,
        }
    }
}

/// Observable state of a poll session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollState {
    /// Session created, first attempt not yet made.
    Idle,
    /// Checking the ledger; `attempt` is 1-based.
    Polling {
        /// The attempt currently in progress.
        attempt: u32,
    },
    /// The ledger listed the HWID. Terminal.
    Succeeded,
    /// Attempt budget exhausted without activation. Terminal; a fresh
    /// session (with a fresh counter) is the retry path.
    TimedOut,
}

impl PollState {
    /// Returns true for terminal states.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::TimedOut)
    }
}

/// Progress events emitted by a poll session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollEvent {
    /// An attempt is starting.
    Attempt {
        /// 1-based attempt number.
        attempt: u32,
        /// Attempt budget.
        max: u32,
    },
    /// The HWID appeared in the ledger.
    Activated,
    /// The attempt budget ran out.
    TimedOut,
}

/// Handle to one run of the activation polling loop.
///
/// Dropping the handle does not stop the task; superseding or cancelling via
/// the owning [`ActivationPoller`] does.
pub struct PollSession {
    id: u64,
    hwid: Hwid,
    state: Arc<RwLock<PollState>>,
    current: Arc<AtomicU64>,
    events: mpsc::Receiver<PollEvent>,
    task: JoinHandle<()>,
}

impl PollSession {
    /// Returns this session's id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the HWID this session is watching for.
    #[must_use]
    pub fn hwid(&self) -> &Hwid {
        &self.hwid
    }

    /// Returns whether this session is still the current one.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }

    /// Returns a snapshot of the session state.
    pub async fn state(&self) -> PollState {
        *self.state.read().await
    }

    /// Receives the next progress event.
    ///
    /// Returns `None` once the session has ended (terminal event already
    /// delivered, or the session went stale and its task exited).
    pub async fn next_event(&mut self) -> Option<PollEvent> {
        self.events.recv().await
    }

    /// Waits for the polling task to exit. Test/shutdown aid; sessions do
    /// not need to be joined.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

impl std::fmt::Debug for PollSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollSession")
            .field("id", &self.id)
            .field("hwid", &self.hwid)
            .field("current", &self.is_current())
            .finish()
    }
}

/// Creates and supersedes poll sessions against one ledger.
pub struct ActivationPoller {
    ledger: Arc<LedgerClient>,
    config: PollConfig,
    /// Id of the current session; 0 means none has been started.
    current: Arc<AtomicU64>,
}

impl ActivationPoller {
    /// Creates a poller over the given ledger client.
    pub fn new(ledger: LedgerClient, config: PollConfig) -> Self {
        Self {
            ledger: Arc::new(ledger),
            config,
            current: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns the poll configuration.
    #[must_use]
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Starts a new poll session for `hwid`, superseding any session that is
    /// still running.
    pub fn start(&self, hwid: Hwid) -> PollSession {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(session = id, hwid = %hwid, "starting poll session");

        let state = Arc::new(RwLock::new(PollState::Idle));
        let capacity = self.config.max_attempts as usize + 2;
        let (tx, rx) = mpsc::channel(capacity);

        let task = tokio::spawn(poll_loop(
            Arc::clone(&self.ledger),
            hwid.clone(),
            self.config.clone(),
            id,
            Arc::clone(&self.current),
            Arc::clone(&state),
            tx,
        ));

        PollSession {
            id,
            hwid,
            state,
            current: Arc::clone(&self.current),
            events: rx,
            task,
        }
    }

    /// Cancels the current session without starting a new one.
    ///
    /// Cooperative: the task stops scheduling attempts at its next wake-up,
    /// and any in-flight fetch result is discarded.
    pub fn cancel(&self) {
        let stale = self.current.fetch_add(1, Ordering::SeqCst);
        debug!(session = stale, "cancelled poll session");
    }
}

/// One session's polling loop.
///
/// Every effect (state write, event send) is gated on the session still
/// being current, including the re-check after a fetch resolves. That is
/// what makes late results from superseded sessions harmless.
async fn poll_loop(
    ledger: Arc<LedgerClient>,
    hwid: Hwid,
    config: PollConfig,
    id: u64,
    current: Arc<AtomicU64>,
    state: Arc<RwLock<PollState>>,
    events: mpsc::Sender<PollEvent>,
) {
    let is_current = || current.load(Ordering::SeqCst) == id;
    let mut ticker = tokio::time::interval(config.interval);

    for attempt in 1..=config.max_attempts {
        ticker.tick().await;
        if !is_current() {
            debug!(session = id, "session superseded, stopping");
            return;
        }

        *state.write().await = PollState::Polling { attempt };
        let _ = events
            .send(PollEvent::Attempt {
                attempt,
                max: config.max_attempts,
            })
            .await;

        match ledger.is_activated(&hwid).await {
            Ok(true) => {
                if !is_current() {
                    debug!(session = id, "discarding stale activation result");
                    return;
                }
                debug!(session = id, attempt, "HWID found in ledger");
                *state.write().await = PollState::Succeeded;
                let _ = events.send(PollEvent::Activated).await;
                return;
            }
            Ok(false) => {}
            Err(err) => {
                // Transient: the attempt is spent, the session keeps going.
                warn!(session = id, attempt, error = %err, "ledger check failed");
            }
        }
    }

    if !is_current() {
        return;
    }
    debug!(session = id, "attempt budget exhausted");
    *state.write().await = PollState::TimedOut;
    let _ = events.send(PollEvent::TimedOut).await;
}
