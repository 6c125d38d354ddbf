//! Activity commands for the session shell.

use chrono::Local;
use quickwin_core::{
    capture, Activity, ActivityPatch, ActivityStatus, ActivityStore, Config, NewActivity,
    QUICK_WIN_MAX_MINUTES,
};

/// Shown in `show` when an activity has no subtasks of its own.
const SUGGESTED_STEPS: [&str; 3] = ["Prepare what you need", "Work through it", "Wrap up and check"];

pub fn add(
    store: &mut ActivityStore,
    config: &Config,
    title: &str,
    mins: Option<u32>,
    desc: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = capture::validate_title(title)?;
    let minutes = match mins {
        Some(m) => capture::validate_duration(m)?,
        None => config.durations.default_minutes,
    };
    let mut draft = NewActivity::new(title, minutes);
    if let Some(desc) = desc {
        draft = draft.with_description(desc);
    }
    let activity = store.add(draft);
    tracing::debug!("added {} ({} min)", activity.id, activity.duration_minutes);
    println!("Added {}. {}", position_of(store, &activity.id), summary(&activity));
    Ok(())
}

/// Batch add from `plan` capture. Every title gets the same estimate and,
/// as in single capture on the quick-entry screen, the title doubles as
/// the initial description.
pub fn plan(store: &mut ActivityStore, titles: &[String], minutes: u32) {
    for title in titles {
        store.add(NewActivity::new(title.clone(), minutes).with_description(title.clone()));
    }
    tracing::debug!("planned {} activities at {minutes} min", titles.len());
    println!("Planned {} activities at {minutes} min each.", titles.len());
}

pub fn list(
    store: &ActivityStore,
    all: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let rows: Vec<&Activity> = super::listing_order(store)
            .into_iter()
            .filter(|a| all || a.status != ActivityStatus::Cancelled)
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let quick = store.quick_wins();
    let long = store.long_tasks();
    if quick.is_empty() && long.is_empty() && !all {
        println!("No pending activities. `add <title>` starts the list.");
        return Ok(());
    }

    let mut next = 1usize;
    print_section(
        &format!("Quick wins ({QUICK_WIN_MAX_MINUTES} min or less)"),
        &quick,
        &mut next,
    );
    print_section("Longer tasks", &long, &mut next);
    if all {
        print_section("Completed", &store.completed(), &mut next);
        let cancelled: Vec<&Activity> = store
            .activities()
            .iter()
            .filter(|a| a.status == ActivityStatus::Cancelled)
            .collect();
        print_section("Cancelled", &cancelled, &mut next);
    }
    Ok(())
}

pub fn show(store: &ActivityStore, reference: &str) {
    let Some(activity) = super::resolve_ref(store, reference) else {
        println!("Activity not found: {reference}");
        return;
    };

    println!("{}", activity.title);
    println!("  id:        {}", activity.id);
    println!("  status:    {}", activity.status);
    println!("  estimate:  {} min", activity.duration_minutes);
    println!("  quick win: {}", if activity.is_quick_win { "yes" } else { "no" });
    println!("  created:   {}", local_stamp(activity.created_at));
    match activity.completed_at {
        Some(at) => println!("  completed: {}", local_stamp(at)),
        None => println!("  completed: -"),
    }
    match &activity.description {
        Some(desc) => println!("  notes:     {desc}"),
        None => println!("  notes:     -"),
    }

    println!();
    if activity.subtasks.is_empty() {
        println!("Subtasks (suggested)");
        for step in SUGGESTED_STEPS {
            println!("  [ ] {step}");
        }
    } else {
        println!("Subtasks");
        for subtask in &activity.subtasks {
            println!("  [{}] {}", if subtask.done { "x" } else { " " }, subtask.title);
        }
    }
}

pub fn edit(
    store: &mut ActivityStore,
    reference: &str,
    title: Option<String>,
    mins: Option<u32>,
    desc: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(id) = super::resolve_id(store, reference) else {
        println!("Activity not found: {reference}");
        return Ok(());
    };
    if title.is_none() && mins.is_none() && desc.is_none() {
        println!("Nothing to change.");
        return Ok(());
    }

    let mut patch = ActivityPatch::default();
    if let Some(title) = title {
        patch.title = Some(capture::validate_title(&title)?);
    }
    if let Some(mins) = mins {
        patch.duration_minutes = Some(capture::validate_duration(mins)?);
    }
    patch.description = desc;

    store.update(&id, patch);
    if let Some(activity) = store.find_by_id(&id) {
        tracing::debug!("updated {id}");
        println!("Updated: {}", summary(activity));
    }
    Ok(())
}

pub fn done(store: &mut ActivityStore, reference: &str) {
    let Some(id) = super::resolve_id(store, reference) else {
        println!("Activity not found: {reference}");
        return;
    };
    store.complete(&id);
    if let Some(activity) = store.find_by_id(&id) {
        tracing::debug!("completed {id}");
        println!("Done: {}", activity.title);
    }
}

pub fn cancel(store: &mut ActivityStore, reference: &str) {
    let Some(id) = super::resolve_id(store, reference) else {
        println!("Activity not found: {reference}");
        return;
    };
    store.cancel(&id);
    if let Some(activity) = store.find_by_id(&id) {
        tracing::debug!("cancelled {id}");
        println!("Cancelled: {}", activity.title);
    }
}

pub fn reactivate(store: &mut ActivityStore, reference: &str) {
    let Some(id) = super::resolve_id(store, reference) else {
        println!("Activity not found: {reference}");
        return;
    };
    store.reactivate(&id);
    if let Some(activity) = store.find_by_id(&id) {
        tracing::debug!("reactivated {id}");
        println!("Reactivated: {}", activity.title);
    }
}

pub fn rm(store: &mut ActivityStore, reference: &str) {
    let Some((id, title)) = super::resolve_ref(store, reference).map(|a| (a.id.clone(), a.title.clone()))
    else {
        println!("Activity not found: {reference}");
        return;
    };
    store.remove(&id);
    tracing::debug!("removed {id}");
    println!("Removed: {title}");
}

fn print_section(header: &str, rows: &[&Activity], next: &mut usize) {
    if rows.is_empty() {
        return;
    }
    println!("{header}");
    for activity in rows {
        println!("  {:>2}. [{}] {}", next, status_mark(activity), summary(activity));
        *next += 1;
    }
}

fn summary(activity: &Activity) -> String {
    let mut line = format!("{} ({} min", activity.title, activity.duration_minutes);
    if activity.is_quick_win {
        line.push_str(", quick win");
    }
    line.push(')');
    line
}

fn status_mark(activity: &Activity) -> char {
    match activity.status {
        ActivityStatus::Pending => ' ',
        ActivityStatus::Completed => 'x',
        ActivityStatus::Cancelled => '-',
    }
}

fn position_of(store: &ActivityStore, id: &str) -> usize {
    super::listing_order(store)
        .iter()
        .position(|a| a.id == id)
        .map(|i| i + 1)
        .unwrap_or(0)
}

fn local_stamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}
