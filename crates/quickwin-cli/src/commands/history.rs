//! History command: completed activities grouped by day.

use chrono::Local;
use quickwin_core::ActivityStore;

pub fn run(store: &ActivityStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sections = store.history();

    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }
    if sections.is_empty() {
        println!("No completed activities yet.");
        return Ok(());
    }

    // Numbers continue the `list` ordering so history rows can be used as
    // references too, e.g. for `reactivate`.
    let order = super::listing_order(store);
    for section in sections {
        println!("{}", section.title);
        for activity in section.activities {
            let position = order
                .iter()
                .position(|a| a.id == activity.id)
                .map(|i| i + 1)
                .unwrap_or(0);
            let time = match activity.completed_at {
                Some(at) => at.with_timezone(&Local).format("%H:%M").to_string(),
                None => "--:--".to_string(),
            };
            println!("  {:>2}. {}  {} ({} min)", position, time, activity.title, activity.duration_minutes);
        }
    }
    Ok(())
}
