use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every countdown state change produces an Event.
/// Commands return the event they caused; the session driver fans them
/// out to subscribers over a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// One second elapsed while the countdown was live.
    TimerTick {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A short break was armed and started in one step.
    BreakStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero. Fired exactly once per run-down.
    TimerCompleted {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        running: bool,
        paused: bool,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Timestamp carried by the event, whichever variant it is.
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::TimerStarted { at, .. }
            | Event::TimerTick { at, .. }
            | Event::TimerPaused { at, .. }
            | Event::TimerResumed { at, .. }
            | Event::TimerReset { at, .. }
            | Event::BreakStarted { at, .. }
            | Event::TimerCompleted { at }
            | Event::StateSnapshot { at, .. } => *at,
        }
    }
}
