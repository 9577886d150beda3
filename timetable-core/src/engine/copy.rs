//! Toggle-copy: the drag-across-dates gesture.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::event::{new_id, Event};

/// Copy every event on `source_date` onto each of `target_dates`, toggling:
/// a target day that already holds an identical event (same title, minute
/// range, and color) loses that event instead of gaining a duplicate.
///
/// Copies share a group id with their source so the whole set can later be
/// edited or deleted as one recurring task. A source event without a group
/// gets a fresh one, reused across all targets in this call and backfilled
/// onto the source itself. A target equal to the source date is skipped.
/// If nothing exists on `source_date`, the collection is returned unchanged.
pub fn copy_day(all: Vec<Event>, source_date: NaiveDate, target_dates: &[NaiveDate]) -> Vec<Event> {
    let sources: Vec<Event> = all
        .iter()
        .filter(|e| e.date == source_date)
        .cloned()
        .collect();
    if sources.is_empty() {
        return all;
    }

    let mut to_delete: HashSet<String> = HashSet::new();
    let mut created: Vec<Event> = Vec::new();
    // Fresh group ids for sources that had none, keyed by source event id;
    // applied to the sources after the scan so the scan itself only ever
    // sees the original collection.
    let mut pending_groups: HashMap<String, String> = HashMap::new();

    for source in &sources {
        let mut group_id = source.group_id.clone();

        for &target in target_dates {
            if target == source_date {
                continue;
            }

            let existing = all.iter().find(|e| {
                e.date == target
                    && e.signature() == source.signature()
                    && !to_delete.contains(&e.id)
            });

            match existing {
                // Toggle off: an identical event is already there.
                Some(hit) => {
                    to_delete.insert(hit.id.clone());
                }
                // Toggle on: add a linked copy.
                None => {
                    let group = group_id.get_or_insert_with(|| {
                        pending_groups
                            .entry(source.id.clone())
                            .or_insert_with(new_id)
                            .clone()
                    });

                    created.push(Event {
                        id: new_id(),
                        date: target,
                        group_id: Some(group.clone()),
                        ..source.clone()
                    });
                }
            }
        }
    }

    let mut result: Vec<Event> = all
        .into_iter()
        .filter(|e| !to_delete.contains(&e.id))
        .collect();

    // Link sources that gained a group in this call.
    for event in &mut result {
        if let Some(group) = pending_groups.get(&event.id) {
            event.group_id = Some(group.clone());
        }
    }

    result.extend(created);
    result
}
