//! The event type and its identity rules.
//!
//! An event occupies exactly one calendar day and a minute range within it.
//! The persisted JSON shape uses camelCase field names (`startMinute`,
//! `colorHex`, ...) and omits `groupId` when the event was never copied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{TimetableError, TimetableResult};

/// Minimum event duration, in minutes.
pub const MIN_DURATION_MIN: u16 = 15;

/// Last valid minute of a day (23:59).
pub const LAST_MINUTE: u16 = 1439;

/// The fixed palette events are tagged with.
pub const COLOR_PALETTE: [&str; 8] = [
    "#EF4444", // Red
    "#F97316", // Orange
    "#F59E0B", // Amber
    "#10B981", // Emerald
    "#3B82F6", // Blue
    "#6366F1", // Indigo
    "#8B5CF6", // Violet
    "#EC4899", // Pink
];

/// One scheduled item on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque unique id, stable for the event's lifetime, never reused.
    pub id: String,
    pub title: String,
    /// Calendar day the event occupies (no multi-day spans).
    pub date: NaiveDate,
    /// Minutes since midnight, 0-1439, naive local time.
    pub start_minute: u16,
    pub end_minute: u16,
    pub color_hex: String,
    /// Shared by all events created together via a copy; links the
    /// instances of one recurring task so they are edited as a unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Event {
    /// Create an event with a fresh id, validating the minute range and the
    /// minimum duration. Use [`clamp_end_minute`] first for the lenient
    /// "pull the end up" behavior.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_minute: u16,
        end_minute: u16,
        color_hex: impl Into<String>,
    ) -> TimetableResult<Event> {
        if start_minute > LAST_MINUTE {
            return Err(TimetableError::InvalidMinute(start_minute));
        }
        if end_minute > LAST_MINUTE {
            return Err(TimetableError::InvalidMinute(end_minute));
        }
        let duration = end_minute as i32 - start_minute as i32;
        if duration < MIN_DURATION_MIN as i32 {
            return Err(TimetableError::InvalidDuration {
                min: MIN_DURATION_MIN,
                got: duration,
            });
        }
        Ok(Event {
            id: new_id(),
            title: title.into(),
            date,
            start_minute,
            end_minute,
            color_hex: color_hex.into(),
            group_id: None,
        })
    }

    /// The identity used by toggle-copy to decide whether two events on
    /// different days are "the same": content, time range, and color.
    /// `id`, `date`, and `group_id` are deliberately excluded.
    pub fn signature(&self) -> (&str, u16, u16, &str) {
        (
            &self.title,
            self.start_minute,
            self.end_minute,
            &self.color_hex,
        )
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

/// Generate a fresh opaque id (used for both event and group ids).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Pull the end minute up so the event is at least 15 minutes long.
pub fn clamp_end_minute(start_minute: u16, end_minute: u16) -> u16 {
    end_minute.max(start_minute.saturating_add(MIN_DURATION_MIN))
}
