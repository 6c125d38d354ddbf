//! # Quickwin Core Library
//!
//! This library provides the core logic for Quickwin, a personal activity
//! manager built around one question: what can be knocked out in five
//! minutes or less? It implements a CLI-first philosophy where every
//! operation is available through the core API, with the interactive shell
//! being a thin presentation layer over the same library.
//!
//! ## Architecture
//!
//! - **Activity Store**: In-memory list owning all lifecycle transitions
//!   and the derived quick-win/longer/completed views. Nothing is persisted;
//!   one process is one session.
//! - **Countdown Timer**: A synchronous one-second state machine plus an
//!   async session driver that owns the single scheduled tick task
//! - **History**: Calendar-day grouping of completed activities in the
//!   local timezone
//! - **Capture**: Multi-line plan intake and the caller-side validation the
//!   store itself deliberately skips
//!
//! ## Key Components
//!
//! - [`ActivityStore`]: Lifecycle transitions and derived views
//! - [`Countdown`] / [`SessionTimer`]: Focus session timing
//! - [`Config`]: Application configuration management

pub mod activity;
pub mod capture;
pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod store;
pub mod timer;

pub use activity::{Activity, ActivityStatus, Subtask, QUICK_WIN_MAX_MINUTES};
pub use config::Config;
pub use error::{ConfigError, ValidationError};
pub use events::Event;
pub use history::{day_label, group_by_day, HistorySection};
pub use store::{ActivityPatch, ActivityStore, NewActivity};
pub use timer::{Countdown, SessionTimer, BREAK_SECS, DEFAULT_FOCUS_SECS};
