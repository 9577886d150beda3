//! Recurring-group edits: one patch applied to every linked instance.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A partial edit applied to every event in a recurring group.
///
/// `None` fields are left untouched. This is a plain field merge: the
/// engine trusts the caller to have validated minute values already.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub start_minute: Option<u16>,
    pub end_minute: Option<u16>,
    pub color_hex: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start_minute.is_none()
            && self.end_minute.is_none()
            && self.color_hex.is_none()
    }

    fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(start) = self.start_minute {
            event.start_minute = start;
        }
        if let Some(end) = self.end_minute {
            event.end_minute = end;
        }
        if let Some(color) = &self.color_hex {
            event.color_hex = color.clone();
        }
    }
}

/// Apply `patch` to every event whose group id matches; all other events
/// are untouched and the count never changes. Unknown group is a no-op.
pub fn update_group(mut all: Vec<Event>, group_id: &str, patch: &EventPatch) -> Vec<Event> {
    for event in all
        .iter_mut()
        .filter(|e| e.group_id.as_deref() == Some(group_id))
    {
        patch.apply(event);
    }
    all
}

/// Remove every event with this group id. Events with no group or a
/// different group are untouched; zero matches is a no-op.
pub fn delete_group(mut all: Vec<Event>, group_id: &str) -> Vec<Event> {
    all.retain(|e| e.group_id.as_deref() != Some(group_id));
    all
}
