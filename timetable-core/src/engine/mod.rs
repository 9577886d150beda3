//! Pure event-set transformations: collection in, collection out.
//!
//! Every function here takes the full collection and returns a full
//! replacement; the caller decides when to persist. Order is preserved
//! (append for additions, filter for removals) so equal inputs produce
//! deterministic outputs.

mod copy;
mod group;

pub use copy::copy_day;
pub use group::{delete_group, update_group, EventPatch};

use crate::event::Event;

/// Append one event. The caller guarantees id uniqueness and the
/// minimum-duration invariant.
pub fn insert(mut all: Vec<Event>, event: Event) -> Vec<Event> {
    all.push(event);
    all
}

/// Remove the event with the given id. Unknown id is a no-op.
pub fn delete_by_id(mut all: Vec<Event>, id: &str) -> Vec<Event> {
    all.retain(|e| e.id != id);
    all
}

/// Replace the event carrying the same id. Unknown id is a no-op.
pub fn update(mut all: Vec<Event>, updated: Event) -> Vec<Event> {
    if let Some(slot) = all.iter_mut().find(|e| e.id == updated.id) {
        *slot = updated;
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn make_event(title: &str) -> Event {
        Event::new(title, day("2024-01-01"), 480, 540, "#EF4444").unwrap()
    }

    #[test]
    fn insert_appends_at_the_end() {
        let all = insert(vec![make_event("a")], make_event("b"));
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].title, "b");
    }

    #[test]
    fn delete_removes_only_the_matching_id() {
        let a = make_event("a");
        let b = make_event("b");
        let id = a.id.clone();
        let all = delete_by_id(vec![a, b], &id);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "b");
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let all = vec![make_event("a")];
        let result = delete_by_id(all.clone(), "nope");
        assert_eq!(result, all);
    }

    #[test]
    fn update_replaces_in_place() {
        let a = make_event("a");
        let b = make_event("b");
        let mut edited = a.clone();
        edited.title = "a2".to_string();
        let all = update(vec![a, b], edited);
        assert_eq!(all[0].title, "a2");
        assert_eq!(all[1].title, "b");
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let all = vec![make_event("a")];
        let mut stranger = make_event("x");
        stranger.id = "nope".to_string();
        let result = update(all.clone(), stranger);
        assert_eq!(result, all);
    }
}
