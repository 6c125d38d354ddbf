//! Day grouping for the completed history view.
//!
//! Labels and groups follow the calendar day of the completion timestamp in
//! the local timezone. Group order is first-encounter order while scanning
//! the (already newest-first) completed list, so the newest day leads and a
//! stray out-of-order timestamp never reorders existing sections.

use chrono::{DateTime, Local, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::activity::Activity;

/// Bucket label for activities missing their completion timestamp.
pub const NO_DATE_LABEL: &str = "No date";

/// One day bucket of the completed history.
#[derive(Debug, Clone, Serialize)]
pub struct HistorySection<'a> {
    /// "Today", "Yesterday", `DD/MM/YYYY`, or [`NO_DATE_LABEL`].
    pub title: String,
    /// Completed activities for the day, newest first.
    pub activities: Vec<&'a Activity>,
}

/// Label a completion timestamp relative to `today`, in the local timezone.
pub fn day_label(completed_at: Option<DateTime<Utc>>, today: NaiveDate) -> String {
    let Some(at) = completed_at else {
        return NO_DATE_LABEL.to_string();
    };
    let day = at.with_timezone(&Local).date_naive();
    match today.signed_duration_since(day).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => day.format("%d/%m/%Y").to_string(),
    }
}

/// Group a newest-first completed list into day sections.
pub fn group_by_day<'a>(completed: &[&'a Activity], today: NaiveDate) -> Vec<HistorySection<'a>> {
    let mut sections: IndexMap<String, Vec<&'a Activity>> = IndexMap::new();
    for &activity in completed {
        let label = day_label(activity.completed_at, today);
        sections.entry(label).or_default().push(activity);
    }
    sections
        .into_iter()
        .map(|(title, activities)| HistorySection { title, activities })
        .collect()
}
