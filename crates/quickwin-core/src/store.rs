//! In-memory activity store.
//!
//! Owns the activity list for the lifetime of the process and applies every
//! lifecycle transition through the invariant-keeping mutators on
//! [`Activity`]. Derived views (quick wins, longer tasks, completed
//! history) are recomputed from the list on demand rather than cached.
//!
//! Mutations referencing an unknown id change nothing and report it through
//! their `bool` return; they never error.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityStatus, Subtask};
use crate::history::{self, HistorySection};

/// Draft for a new activity. The store assigns the id, the creation
/// timestamp, and the quick-win classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewActivity {
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl NewActivity {
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Self {
        NewActivity {
            title: title.into(),
            description: None,
            duration_minutes,
            subtasks: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update applied by [`ActivityStore::update`].
///
/// Only the present fields change. Derived fields (`is_quick_win`,
/// `completed`, `completed_at`) and immutable fields (`id`, `created_at`)
/// are not patchable; a status patch goes through the same mirror
/// synchronization as the dedicated transitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    pub status: Option<ActivityStatus>,
    pub subtasks: Option<Vec<Subtask>>,
}

/// Process-lifetime container for activities. Nothing is persisted.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        ActivityStore {
            activities: Vec::new(),
        }
    }

    /// Build a store over an existing list, e.g. seed data.
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        ActivityStore { activities }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Add a new activity and return a snapshot of the stored record.
    pub fn add(&mut self, draft: NewActivity) -> Activity {
        let mut activity = Activity::new(draft.title, draft.duration_minutes);
        activity.description = draft.description;
        activity.subtasks = draft.subtasks;
        self.activities.push(activity.clone());
        activity
    }

    /// Apply a partial update. Returns false when the id is unknown.
    pub fn update(&mut self, id: &str, patch: ActivityPatch) -> bool {
        let Some(activity) = self.find_mut(id) else {
            return false;
        };
        if let Some(title) = patch.title {
            activity.title = title;
        }
        if let Some(description) = patch.description {
            activity.description = Some(description);
        }
        if let Some(minutes) = patch.duration_minutes {
            activity.set_duration(minutes);
        }
        if let Some(status) = patch.status {
            activity.set_status(status);
        }
        if let Some(subtasks) = patch.subtasks {
            activity.subtasks = subtasks;
        }
        true
    }

    /// Delete an activity. Returns false when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.activities.len();
        self.activities.retain(|a| a.id != id);
        self.activities.len() != before
    }

    /// Mark an activity completed, stamping the completion time.
    pub fn complete(&mut self, id: &str) -> bool {
        self.transition(id, ActivityStatus::Completed)
    }

    /// Mark an activity cancelled, clearing any completion state.
    pub fn cancel(&mut self, id: &str) -> bool {
        self.transition(id, ActivityStatus::Cancelled)
    }

    /// Return an activity to the pending state.
    pub fn reactivate(&mut self, id: &str) -> bool {
        self.transition(id, ActivityStatus::Pending)
    }

    fn transition(&mut self, id: &str, status: ActivityStatus) -> bool {
        match self.find_mut(id) {
            Some(activity) => {
                activity.set_status(status);
                true
            }
            None => false,
        }
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.id == id)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn find_by_id(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Every activity in insertion order, cancelled ones included.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Pending quick wins, oldest first.
    pub fn quick_wins(&self) -> Vec<&Activity> {
        let mut items: Vec<&Activity> = self
            .activities
            .iter()
            .filter(|a| a.is_pending() && a.is_quick_win)
            .collect();
        items.sort_by_key(|a| a.created_at);
        items
    }

    /// Pending activities above the quick-win threshold, oldest first.
    pub fn long_tasks(&self) -> Vec<&Activity> {
        let mut items: Vec<&Activity> = self
            .activities
            .iter()
            .filter(|a| a.is_pending() && !a.is_quick_win)
            .collect();
        items.sort_by_key(|a| a.created_at);
        items
    }

    /// Completed activities, newest completion first. A record missing its
    /// completion timestamp sorts as the epoch, i.e. last.
    pub fn completed(&self) -> Vec<&Activity> {
        let mut items: Vec<&Activity> = self.activities.iter().filter(|a| a.completed).collect();
        items.sort_by_key(|a| {
            std::cmp::Reverse(a.completed_at.map(|at| at.timestamp_millis()).unwrap_or(0))
        });
        items
    }

    /// Completed view grouped into day sections for today's local date.
    pub fn history(&self) -> Vec<HistorySection<'_>> {
        history::group_by_day(&self.completed(), Local::now().date_naive())
    }
}
