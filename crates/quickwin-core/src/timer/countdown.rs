//! Countdown state machine for one focus session.
//!
//! The countdown is a wall-clock-free state machine over whole seconds. It
//! does not schedule anything itself - the caller (normally
//! [`super::SessionTimer`]) calls `tick()` once per second.
//!
//! ## State
//!
//! ```text
//! stopped ──start──> live ──pause──> paused ──resume──> live
//!    ^                 │
//!    └──reset / zero───┘
//! ```
//!
//! `tick()` only moves while live with time remaining, so a countdown that
//! sits at zero never completes and a paused one never loses a second.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Default focus session length in seconds (25 minutes).
pub const DEFAULT_FOCUS_SECS: u64 = 25 * 60;

/// Default short break length in seconds (5 minutes).
pub const BREAK_SECS: u64 = 5 * 60;

/// Second-resolution countdown with explicit running/paused flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_secs: u64,
    running: bool,
    paused: bool,
}

impl Countdown {
    /// Create a stopped countdown loaded with `duration_secs`.
    pub fn new(duration_secs: u64) -> Self {
        Countdown {
            remaining_secs: duration_secs,
            running: false,
            paused: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Live means seconds are actually elapsing.
    pub fn is_ticking(&self) -> bool {
        self.running && !self.paused
    }

    /// Zero-padded `MM:SS` of the remaining time.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            running: self.running,
            paused: self.paused,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.remaining_secs == 0 {
            return None; // Nothing to count down.
        }
        if self.is_ticking() {
            return None; // Already live.
        }
        self.running = true;
        self.paused = false;
        Some(Event::TimerStarted {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_ticking() {
            return None;
        }
        self.paused = true;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        if !(self.running && self.paused) {
            return None;
        }
        self.paused = false;
        Some(Event::TimerResumed {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop and reload with `to_secs`.
    pub fn reset(&mut self, to_secs: u64) -> Option<Event> {
        self.remaining_secs = to_secs;
        self.running = false;
        self.paused = false;
        Some(Event::TimerReset {
            remaining_secs: to_secs,
            at: Utc::now(),
        })
    }

    /// Reload with `duration_secs` and start immediately.
    pub fn start_break(&mut self, duration_secs: u64) -> Option<Event> {
        if duration_secs == 0 {
            return None;
        }
        self.remaining_secs = duration_secs;
        self.running = true;
        self.paused = false;
        Some(Event::BreakStarted {
            duration_secs,
            at: Utc::now(),
        })
    }

    /// Advance one second. Returns `Some(Event::TimerCompleted)` exactly
    /// once, on the tick that reaches zero; that tick also stops the
    /// countdown. Returns `None` whenever the tick rule does not apply.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_ticking() || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            self.paused = false;
            return Some(Event::TimerCompleted { at: Utc::now() });
        }
        Some(Event::TimerTick {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Countdown::new(DEFAULT_FOCUS_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_stopped() {
        let countdown = Countdown::new(60);
        assert_eq!(countdown.remaining_secs(), 60);
        assert!(!countdown.is_running());
        assert!(!countdown.is_paused());
        assert!(!countdown.is_ticking());
    }

    #[test]
    fn start_pause_resume() {
        let mut countdown = Countdown::new(60);

        assert!(countdown.start().is_some());
        assert!(countdown.is_ticking());

        assert!(countdown.pause().is_some());
        assert!(countdown.is_running());
        assert!(countdown.is_paused());
        assert!(!countdown.is_ticking());

        assert!(countdown.resume().is_some());
        assert!(countdown.is_ticking());
    }

    #[test]
    fn start_at_zero_is_noop() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.start().is_none());
        assert!(!countdown.is_running());
        assert!(countdown.tick().is_none());
    }

    #[test]
    fn start_when_live_is_noop() {
        let mut countdown = Countdown::new(60);
        assert!(countdown.start().is_some());
        assert!(countdown.start().is_none());
    }

    #[test]
    fn pause_requires_live_resume_requires_paused() {
        let mut countdown = Countdown::new(60);
        assert!(countdown.pause().is_none());
        assert!(countdown.resume().is_none());

        countdown.start();
        assert!(countdown.resume().is_none());
        countdown.pause();
        assert!(countdown.pause().is_none());
    }

    #[test]
    fn tick_counts_down() {
        let mut countdown = Countdown::new(3);
        countdown.start();

        match countdown.tick() {
            Some(Event::TimerTick { remaining_secs, .. }) => assert_eq!(remaining_secs, 2),
            other => panic!("expected TimerTick, got {other:?}"),
        }
        assert_eq!(countdown.remaining_secs(), 2);
    }

    #[test]
    fn tick_ignored_unless_live() {
        let mut countdown = Countdown::new(10);
        assert!(countdown.tick().is_none());
        assert_eq!(countdown.remaining_secs(), 10);

        countdown.start();
        countdown.pause();
        assert!(countdown.tick().is_none());
        assert_eq!(countdown.remaining_secs(), 10);
    }

    #[test]
    fn pause_freezes_remaining() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 9);

        countdown.pause();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 9);

        countdown.resume();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 8);
    }

    #[test]
    fn completes_exactly_once() {
        let mut countdown = Countdown::new(5);
        countdown.start();

        let mut completions = 0;
        for _ in 0..8 {
            if let Some(Event::TimerCompleted { .. }) = countdown.tick() {
                completions += 1;
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(!countdown.is_running());
        assert!(!countdown.is_ticking());
    }

    #[test]
    fn reset_stops_and_reloads() {
        let mut countdown = Countdown::new(60);
        countdown.start();
        countdown.tick();

        assert!(countdown.reset(90).is_some());
        assert_eq!(countdown.remaining_secs(), 90);
        assert!(!countdown.is_running());
        assert!(!countdown.is_paused());
    }

    #[test]
    fn start_after_reset_counts_down_again() {
        let mut countdown = Countdown::new(60);
        countdown.start();
        countdown.tick();
        countdown.reset(60);

        // Stopped means neither pause nor resume applies.
        assert!(countdown.pause().is_none());
        assert!(countdown.resume().is_none());
        assert!(!countdown.is_ticking());

        assert!(countdown.start().is_some());
        assert!(countdown.is_ticking());
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 59);
    }

    #[test]
    fn break_starts_running() {
        let mut countdown = Countdown::new(60);
        match countdown.start_break(BREAK_SECS) {
            Some(Event::BreakStarted { duration_secs, .. }) => {
                assert_eq!(duration_secs, BREAK_SECS);
            }
            other => panic!("expected BreakStarted, got {other:?}"),
        }
        assert_eq!(countdown.remaining_secs(), 300);
        assert!(countdown.is_ticking());
    }

    #[test]
    fn zero_break_is_noop() {
        let mut countdown = Countdown::new(60);
        assert!(countdown.start_break(0).is_none());
        assert_eq!(countdown.remaining_secs(), 60);
        assert!(!countdown.is_running());
    }

    #[test]
    fn clock_formats_mm_ss() {
        assert_eq!(Countdown::new(DEFAULT_FOCUS_SECS).clock(), "25:00");
        assert_eq!(Countdown::new(65).clock(), "01:05");
        assert_eq!(Countdown::new(9).clock(), "00:09");
        assert_eq!(Countdown::new(0).clock(), "00:00");
        assert_eq!(Countdown::new(3600).clock(), "60:00");
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let mut countdown = Countdown::new(120);
        countdown.start();
        countdown.pause();

        match countdown.snapshot() {
            Event::StateSnapshot {
                running,
                paused,
                remaining_secs,
                ..
            } => {
                assert!(running);
                assert!(paused);
                assert_eq!(remaining_secs, 120);
            }
            other => panic!("expected StateSnapshot, got {other:?}"),
        }
    }
}
