//! Async driver for a [`Countdown`].
//!
//! [`SessionTimer`] owns the countdown behind a mutex together with the one
//! scheduled tick task and the sending half of an event stream. Commands
//! apply to the countdown first, then reconcile the tick task against the
//! new state: the previous handle is always aborted before a fresh task is
//! spawned, so at most one ticker is ever live. Aborting is synchronous and
//! idempotent, and a tick already in flight lands on the countdown's own
//! guards as a no-op, so pause and reset take effect without waiting.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::countdown::Countdown;
use crate::events::Event;

/// Drives one focus session. Commands must be called from within a tokio
/// runtime; the ticker task is spawned onto it.
pub struct SessionTimer {
    countdown: Arc<Mutex<Countdown>>,
    tick_period: Duration,
    ticker: Option<JoinHandle<()>>,
    events: UnboundedSender<Event>,
}

impl SessionTimer {
    /// Create a timer loaded with `duration_secs`, plus the receiving end
    /// of its event stream.
    pub fn new(duration_secs: u64) -> (Self, UnboundedReceiver<Event>) {
        Self::with_tick_period(duration_secs, Duration::from_secs(1))
    }

    /// As [`SessionTimer::new`] with a custom tick period. Shorter periods
    /// compress a session, e.g. for demos and tests.
    pub fn with_tick_period(
        duration_secs: u64,
        tick_period: Duration,
    ) -> (Self, UnboundedReceiver<Event>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let timer = SessionTimer {
            countdown: Arc::new(Mutex::new(Countdown::new(duration_secs))),
            tick_period,
            ticker: None,
            events,
        };
        (timer, receiver)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u64 {
        lock(&self.countdown).remaining_secs()
    }

    pub fn is_ticking(&self) -> bool {
        lock(&self.countdown).is_ticking()
    }

    pub fn is_paused(&self) -> bool {
        lock(&self.countdown).is_paused()
    }

    pub fn clock(&self) -> String {
        lock(&self.countdown).clock()
    }

    pub fn snapshot(&self) -> Event {
        lock(&self.countdown).snapshot()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.command(Countdown::start)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.command(Countdown::pause)
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.command(Countdown::resume)
    }

    pub fn reset(&mut self, to_secs: u64) -> Option<Event> {
        self.command(|c| c.reset(to_secs))
    }

    pub fn start_break(&mut self, duration_secs: u64) -> Option<Event> {
        self.command(|c| c.start_break(duration_secs))
    }

    fn command(&mut self, f: impl FnOnce(&mut Countdown) -> Option<Event>) -> Option<Event> {
        let event = {
            let mut countdown = lock(&self.countdown);
            f(&mut countdown)
        };
        // A no-op command changed nothing, so the ticker keeps its phase.
        if let Some(event) = &event {
            let _ = self.events.send(event.clone());
            self.sync_ticker();
        }
        event
    }

    /// Reconcile the tick task with the countdown: exactly one live task
    /// while the countdown is live, none otherwise.
    fn sync_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        if !self.is_ticking() {
            return;
        }
        let countdown = Arc::clone(&self.countdown);
        let events = self.events.clone();
        self.ticker = Some(tokio::spawn(run_ticker(countdown, events, self.tick_period)));
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

/// Tick loop. Exits on its own when the countdown completes or stops being
/// live; the owner aborts it on every state-changing command anyway.
async fn run_ticker(
    countdown: Arc<Mutex<Countdown>>,
    events: UnboundedSender<Event>,
    period: Duration,
) {
    // First fire lands one full period after spawn, not immediately.
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    loop {
        interval.tick().await;
        let event = {
            let mut countdown = lock(&countdown);
            countdown.tick()
        };
        match event {
            Some(event) => {
                let completed = matches!(event, Event::TimerCompleted { .. });
                let _ = events.send(event);
                if completed {
                    return;
                }
            }
            // Paused or stopped under our feet.
            None => return,
        }
    }
}

/// The countdown stays usable even if a lock holder panicked; every
/// mutation is a plain field write, so the inner value is consistent.
fn lock(countdown: &Mutex<Countdown>) -> MutexGuard<'_, Countdown> {
    countdown.lock().unwrap_or_else(PoisonError::into_inner)
}
