//! Countdown timer for focus sessions.

mod countdown;
mod session;

pub use countdown::{Countdown, BREAK_SECS, DEFAULT_FOCUS_SECS};
pub use session::SessionTimer;
