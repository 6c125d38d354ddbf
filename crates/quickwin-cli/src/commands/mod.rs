//! Shell command implementations.

pub mod activity;
pub mod config;
pub mod focus;
pub mod history;

use quickwin_core::{Activity, ActivityStatus, ActivityStore};

/// Activities in the order the shell numbers them: quick wins, longer
/// tasks, completed (newest first), then cancelled. Positions printed by
/// `list` and `history` stay valid as references until the store changes.
pub fn listing_order(store: &ActivityStore) -> Vec<&Activity> {
    let mut ordered: Vec<&Activity> = Vec::new();
    ordered.extend(store.quick_wins());
    ordered.extend(store.long_tasks());
    ordered.extend(store.completed());
    ordered.extend(
        store
            .activities()
            .iter()
            .filter(|a| a.status == ActivityStatus::Cancelled),
    );
    ordered
}

/// Resolves a user-supplied reference to an activity.
///
/// Tried in order: exact id, 1-based list position, unique id prefix.
/// Ids always start with `act-`, so a digits-only reference can never
/// shadow one.
pub fn resolve_ref<'a>(store: &'a ActivityStore, reference: &str) -> Option<&'a Activity> {
    if let Some(activity) = store.find_by_id(reference) {
        return Some(activity);
    }
    if let Ok(position) = reference.parse::<usize>() {
        return match position {
            0 => None,
            n => listing_order(store).get(n - 1).copied(),
        };
    }
    let mut matches = store
        .activities()
        .iter()
        .filter(|a| a.id.starts_with(reference));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only),
        _ => None, // No match, or prefix is ambiguous.
    }
}

/// Same resolution as [`resolve_ref`], returning an owned id so the caller
/// can go on to mutate the store.
pub fn resolve_id(store: &ActivityStore, reference: &str) -> Option<String> {
    resolve_ref(store, reference).map(|a| a.id.clone())
}
