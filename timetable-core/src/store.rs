//! Event persistence: one JSON blob holding the whole collection.
//!
//! The store is a thin boundary — load everything, save everything. All
//! queries are full scans at call time; nothing is indexed on disk. The
//! convenience mutators are plain load-modify-save and exist so callers
//! that need no undo (single add/delete) can skip the session layer.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;

use crate::engine;
use crate::error::{TimetableError, TimetableResult};
use crate::event::Event;

/// Filename of the persisted blob inside the data directory.
pub const STORE_FILE: &str = "events.json";

/// The persistence seam: load and replace the full event collection.
pub trait EventStore {
    fn load(&self) -> TimetableResult<Vec<Event>>;
    fn save(&self, events: &[Event]) -> TimetableResult<()>;

    /// Append one event and persist. The caller guarantees id uniqueness
    /// and the minimum-duration invariant.
    fn insert(&self, event: Event) -> TimetableResult<Vec<Event>> {
        let events = engine::insert(self.load()?, event);
        self.save(&events)?;
        Ok(events)
    }

    /// Append a batch of events and persist.
    fn insert_all(&self, new_events: Vec<Event>) -> TimetableResult<Vec<Event>> {
        let mut events = self.load()?;
        events.extend(new_events);
        self.save(&events)?;
        Ok(events)
    }

    /// Replace the stored event carrying the same id. Unknown id is a no-op.
    fn update(&self, updated: Event) -> TimetableResult<Vec<Event>> {
        let events = engine::update(self.load()?, updated);
        self.save(&events)?;
        Ok(events)
    }

    /// Remove one event by id. Unknown id is a no-op.
    fn delete_by_id(&self, id: &str) -> TimetableResult<Vec<Event>> {
        let events = engine::delete_by_id(self.load()?, id);
        self.save(&events)?;
        Ok(events)
    }

    /// Remove every event in a recurring group. Zero matches is a no-op.
    fn delete_by_group(&self, group_id: &str) -> TimetableResult<Vec<Event>> {
        let events = engine::delete_group(self.load()?, group_id);
        self.save(&events)?;
        Ok(events)
    }

    /// All events on one day, in stored order.
    fn events_by_date(&self, date: NaiveDate) -> TimetableResult<Vec<Event>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect())
    }
}

/// Store backed by a single `events.json` file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `events.json` inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> JsonFileStore {
        JsonFileStore {
            path: dir.into().join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStore for JsonFileStore {
    /// A missing file is an empty collection (first run); unreadable or
    /// corrupt content is an explicit error, never silently discarded.
    fn load(&self) -> TimetableResult<Vec<Event>> {
        if !self.path.exists() {
            debug!("no event store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .map_err(|e| TimetableError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&self, events: &[Event]) -> TimetableResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(events)?;

        // Write-then-rename so a crash never leaves a half-written blob.
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, content)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
///
/// Uses `RefCell` because the whole design is single-threaded and
/// synchronous; nothing here is `Sync`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RefCell<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn with_events(events: Vec<Event>) -> MemoryStore {
        MemoryStore {
            events: RefCell::new(events),
        }
    }
}

impl EventStore for MemoryStore {
    fn load(&self) -> TimetableResult<Vec<Event>> {
        Ok(self.events.borrow().clone())
    }

    fn save(&self, events: &[Event]) -> TimetableResult<()> {
        *self.events.borrow_mut() = events.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn make_event(title: &str, date: &str) -> Event {
        Event::new(title, day(date), 480, 540, "#EF4444").unwrap()
    }

    #[test]
    fn file_store_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let events = vec![make_event("Gym", "2024-01-01"), make_event("Lunch", "2024-01-02")];
        store.save(&events).unwrap();
        assert_eq!(store.load().unwrap(), events);
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.load().unwrap(), Vec::<Event>::new());
    }

    #[test]
    fn corrupt_blob_is_an_explicit_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            TimetableError::Corrupt(_)
        ));
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/data"));
        store.save(&[make_event("Gym", "2024-01-01")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn persisted_shape_matches_the_wire_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save(&[make_event("Gym", "2024-01-01")]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"startMinute\": 480"));
        assert!(raw.contains("\"colorHex\": \"#EF4444\""));
        assert!(!raw.contains("groupId"));
    }

    #[test]
    fn convenience_mutators_persist() {
        let store = MemoryStore::new();
        let gym = make_event("Gym", "2024-01-01");
        let gym_id = gym.id.clone();

        store.insert(gym).unwrap();
        store.insert(make_event("Lunch", "2024-01-01")).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);

        assert_eq!(store.events_by_date(day("2024-01-01")).unwrap().len(), 2);
        assert!(store.events_by_date(day("2024-02-01")).unwrap().is_empty());

        let events = store.delete_by_id(&gym_id).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(store.load().unwrap(), events);

        // Unknown id is a no-op.
        assert_eq!(store.delete_by_id("nope").unwrap().len(), 1);
    }

    #[test]
    fn delete_by_group_removes_all_instances() {
        let mut a = make_event("Gym", "2024-01-01");
        let mut b = make_event("Gym", "2024-01-02");
        a.group_id = Some("g1".to_string());
        b.group_id = Some("g1".to_string());
        let store = MemoryStore::with_events(vec![a, b, make_event("Lunch", "2024-01-01")]);

        let events = store.delete_by_group("g1").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Lunch");
    }

    #[test]
    fn update_replaces_by_id() {
        let gym = make_event("Gym", "2024-01-01");
        let mut edited = gym.clone();
        edited.title = "Workout".to_string();
        let store = MemoryStore::with_events(vec![gym]);

        let events = store.update(edited).unwrap();
        assert_eq!(events[0].title, "Workout");
    }
}
