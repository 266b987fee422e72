//! Session/Timer Controller
//!
//! [`EscapeRoom`] owns the one session of a client, the countdown task that
//! drives it and the current view. Every state change takes the session lock,
//! so a timer expiry and a final completion can never interleave.

use crate::application::config::EscapeConfig;
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::ProgressBoard;
use crate::domain::repository::{GateApi, ProgressRepository};
use crate::domain::session::{RunId, Session, SessionSnapshot, TickOutcome};
use crate::error::EscapeResult;
use platform::clock::{Clock, SystemClock};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Which screen the participant should be looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Puzzle(PuzzleId),
}

/// Client-side escape room: session, timer, coordinator and gate client
pub struct EscapeRoom<P, G> {
    pub(crate) inner: Arc<RoomInner<P, G>>,
}

impl<P, G> Clone for EscapeRoom<P, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

pub(crate) struct RoomInner<P, G> {
    pub(crate) config: Arc<EscapeConfig>,
    pub(crate) session: Mutex<Session>,
    pub(crate) progress: Arc<P>,
    /// Serializes read-modify-write of stored progress
    pub(crate) progress_lock: Mutex<()>,
    pub(crate) gate: Arc<G>,
    pub(crate) clock: Arc<dyn Clock>,
    view: watch::Sender<View>,
    ticker: std::sync::Mutex<Option<JoinHandle<()>>>,
    pub(crate) submitting: AtomicBool,
}

impl<P, G> RoomInner<P, G> {
    pub(crate) fn navigate(&self, view: View) {
        let previous = self.view.send_replace(view);
        if previous != view {
            tracing::debug!(from = ?previous, to = ?view, "Navigate");
        }
    }

    async fn tick(&self, run_id: RunId) -> TickOutcome {
        let mut session = self.session.lock().await;
        let outcome = session.tick(run_id, self.clock.now());
        match outcome {
            TickOutcome::Running { remaining } => {
                tracing::trace!(run = %run_id, remaining, "Tick");
            }
            TickOutcome::Expired => {
                tracing::info!(
                    participant = session.participant().unwrap_or_default(),
                    run = %run_id,
                    "Time expired"
                );
                self.navigate(View::Home);
            }
            TickOutcome::Ignored => {
                tracing::debug!(run = %run_id, current = %session.run_id(), "Ignoring tick");
            }
        }
        outcome
    }

    pub(crate) fn cancel_ticker(&self) {
        let previous = self
            .ticker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = previous {
            handle.abort();
        }
    }
}

impl<P, G> EscapeRoom<P, G>
where
    P: ProgressRepository + Send + Sync + 'static,
    G: GateApi + Send + Sync + 'static,
{
    pub fn new(config: EscapeConfig, progress: P, gate: G) -> Self {
        Self::with_clock(config, progress, gate, Arc::new(SystemClock))
    }

    pub fn with_clock(config: EscapeConfig, progress: P, gate: G, clock: Arc<dyn Clock>) -> Self {
        let session = Session::new(config.catalog.clone(), config.max_seconds());
        let (view, _) = watch::channel(View::Home);
        Self {
            inner: Arc::new(RoomInner {
                config: Arc::new(config),
                session: Mutex::new(session),
                progress: Arc::new(progress),
                progress_lock: Mutex::new(()),
                gate: Arc::new(gate),
                clock,
                view,
                ticker: std::sync::Mutex::new(None),
                submitting: AtomicBool::new(false),
            }),
        }
    }

    pub fn config(&self) -> &EscapeConfig {
        &self.inner.config
    }

    /// Start a session for `participant` and its countdown
    ///
    /// A running session is replaced; its countdown is stopped first.
    pub async fn start(&self, participant: &str) -> EscapeResult<RunId> {
        let mut session = self.inner.session.lock().await;
        let run_id = session.start(participant, self.inner.clock.now())?;
        self.install_ticker(run_id);
        self.inner.navigate(View::Home);

        tracing::info!(
            participant = session.participant().unwrap_or_default(),
            run = %run_id,
            remaining = session.remaining_seconds(),
            "Session started"
        );
        Ok(run_id)
    }

    /// Apply one countdown step for `run_id`
    ///
    /// The background task calls this every `tick_interval`; it is public so a
    /// shell with its own clock can drive the countdown.
    pub async fn tick(&self, run_id: RunId) -> TickOutcome {
        self.inner.tick(run_id).await
    }

    /// Drop the session and stop the countdown
    pub async fn reset(&self) {
        let mut session = self.inner.session.lock().await;
        self.reset_locked(&mut session);
    }

    /// Reset only while `run_id` is still the current run
    pub(crate) async fn reset_if(&self, run_id: RunId) -> bool {
        let mut session = self.inner.session.lock().await;
        if session.run_id() != run_id {
            tracing::debug!(run = %run_id, current = %session.run_id(), "Newer run, not resetting");
            return false;
        }
        self.reset_locked(&mut session);
        true
    }

    fn reset_locked(&self, session: &mut Session) {
        self.inner.cancel_ticker();
        let participant = session.participant().map(str::to_string);
        session.reset();
        self.inner.navigate(View::Home);

        tracing::info!(participant = ?participant, "Session reset");
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner
            .session
            .lock()
            .await
            .snapshot(self.inner.config.critical_seconds())
    }

    pub fn view(&self) -> View {
        *self.inner.view.borrow()
    }

    /// Follow navigation, including the forced return home on timeout
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.inner.view.subscribe()
    }

    /// Whose progress is shown: the participant, or the anonymous player id
    pub async fn identity(&self) -> EscapeResult<String> {
        let participant = self
            .inner
            .session
            .lock()
            .await
            .participant()
            .map(str::to_string);
        match participant {
            Some(name) => Ok(name),
            None => self.inner.progress.anonymous_identity().await,
        }
    }

    pub async fn progress_board(&self) -> EscapeResult<ProgressBoard> {
        let identity = self.identity().await?;
        self.inner
            .progress
            .load(&identity, &self.inner.config.catalog)
            .await
    }

    fn install_ticker(&self, run_id: RunId) {
        let weak: Weak<RoomInner<P, G>> = Arc::downgrade(&self.inner);
        let period = self.inner.config.tick_interval.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                match inner.tick(run_id).await {
                    TickOutcome::Running { .. } => {}
                    TickOutcome::Expired | TickOutcome::Ignored => break,
                }
            }
        });

        let previous = self
            .inner
            .ticker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}
