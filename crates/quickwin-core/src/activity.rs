//! Activity types for the quick-win planning model.
//!
//! An activity is one unit of planned work. Two fields are derived and kept
//! in sync by the mutators here rather than stored independently:
//!
//! - `is_quick_win` follows the estimated duration (five minutes or less)
//! - `completed` / `completed_at` mirror the lifecycle status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest estimate, in minutes, that still counts as a quick win.
pub const QUICK_WIN_MAX_MINUTES: u32 = 5;

/// Lifecycle status of an activity.
///
/// The three states are mutually exclusive. Pending is the initial state.
/// Completed is re-entrant: completing again refreshes the completion
/// timestamp. Cancelled activities can be reactivated back to Pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Activity is planned and not finished (initial state)
    Pending,
    /// Activity was finished
    Completed,
    /// Activity was abandoned without finishing
    Cancelled,
}

impl Default for ActivityStatus {
    fn default() -> Self {
        ActivityStatus::Pending
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityStatus::Pending => write!(f, "pending"),
            ActivityStatus::Completed => write!(f, "completed"),
            ActivityStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Display-only checklist item under an activity.
///
/// The store never mutates subtasks on its own; lifecycle transitions of
/// the parent leave them untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    /// Identifier unique within the parent activity
    pub id: String,
    /// Subtask title
    pub title: String,
    /// Whether the subtask is checked off
    pub done: bool,
}

impl Subtask {
    /// Create an unchecked subtask.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Subtask {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }
}

/// One unit of planned work.
///
/// Mutate through [`Activity::set_duration`] and [`Activity::set_status`]
/// so the derived fields stay consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier, assigned at creation and never reused
    pub id: String,
    /// Activity title (non-empty; validated by callers)
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Estimated duration in minutes (positive; validated by callers)
    pub duration_minutes: u32,
    /// Whether the estimate classifies this as a quick win
    pub is_quick_win: bool,
    /// Lifecycle status
    pub status: ActivityStatus,
    /// Mirror of `status == Completed`
    pub completed: bool,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Completion timestamp (null unless completed)
    pub completed_at: Option<DateTime<Utc>>,
    /// Display-only checklist
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Activity {
    /// Create a new pending activity with a fresh id.
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Self {
        let now = Utc::now();
        Activity {
            id: format!("act-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            title: title.into(),
            description: None,
            duration_minutes,
            is_quick_win: duration_minutes <= QUICK_WIN_MAX_MINUTES,
            status: ActivityStatus::Pending,
            completed: false,
            created_at: now,
            completed_at: None,
            subtasks: Vec::new(),
        }
    }

    /// Change the estimated duration, reclassifying the quick-win flag.
    pub fn set_duration(&mut self, minutes: u32) {
        self.duration_minutes = minutes;
        self.is_quick_win = minutes <= QUICK_WIN_MAX_MINUTES;
    }

    /// Change the lifecycle status, synchronizing the completion mirrors.
    ///
    /// Entering Completed stamps `completed_at` with the current time, also
    /// when the activity was already completed. Every other status clears
    /// both mirrors.
    pub fn set_status(&mut self, status: ActivityStatus) {
        match status {
            ActivityStatus::Completed => {
                self.completed = true;
                self.completed_at = Some(Utc::now());
            }
            ActivityStatus::Pending | ActivityStatus::Cancelled => {
                self.completed = false;
                self.completed_at = None;
            }
        }
        self.status = status;
    }

    pub fn is_pending(&self) -> bool {
        self.status == ActivityStatus::Pending
    }
}
