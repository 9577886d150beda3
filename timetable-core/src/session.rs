//! Session context: the current collection, the store, and undo history.
//!
//! The engine functions stay pure; `Session` is the stateful shell that
//! snapshots before bulk mutations, persists every result, and owns the
//! undo stack. It replaces the ambient global state a UI would otherwise
//! keep at its root: callers construct one session per process and pass
//! it around explicitly.
//!
//! Each mutator computes the full replacement collection first and only
//! adopts it after the store accepted it, so a failed save leaves both
//! the in-memory collection and the blob untouched.

use chrono::NaiveDate;

use crate::engine::{self, EventPatch};
use crate::error::TimetableResult;
use crate::event::Event;
use crate::history::History;
use crate::store::EventStore;

pub struct Session<S: EventStore> {
    store: S,
    events: Vec<Event>,
    history: History,
}

impl<S: EventStore> Session<S> {
    /// Open a session on the store, loading the current collection.
    pub fn open(store: S) -> TimetableResult<Session<S>> {
        let events = store.load()?;
        Ok(Session {
            store,
            events,
            history: History::new(),
        })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Bulk mutations (undoable) ---

    /// Toggle-copy the source day onto the target days.
    pub fn copy_day(
        &mut self,
        source_date: NaiveDate,
        target_dates: &[NaiveDate],
    ) -> TimetableResult<&[Event]> {
        self.apply_bulk(|events| engine::copy_day(events, source_date, target_dates))?;
        Ok(&self.events)
    }

    /// Apply a patch to every event in a recurring group.
    pub fn update_group(
        &mut self,
        group_id: &str,
        patch: &EventPatch,
    ) -> TimetableResult<&[Event]> {
        self.apply_bulk(|events| engine::update_group(events, group_id, patch))?;
        Ok(&self.events)
    }

    /// Delete every event in a recurring group.
    pub fn delete_group(&mut self, group_id: &str) -> TimetableResult<&[Event]> {
        self.apply_bulk(|events| engine::delete_group(events, group_id))?;
        Ok(&self.events)
    }

    // --- Single-event mutations (persisted, not undoable) ---
    // Matches the app's baseline policy: only bulk operations snapshot.

    pub fn insert(&mut self, event: Event) -> TimetableResult<&[Event]> {
        self.apply(|events| engine::insert(events, event))?;
        Ok(&self.events)
    }

    pub fn update(&mut self, updated: Event) -> TimetableResult<&[Event]> {
        self.apply(|events| engine::update(events, updated))?;
        Ok(&self.events)
    }

    pub fn delete(&mut self, id: &str) -> TimetableResult<&[Event]> {
        self.apply(|events| engine::delete_by_id(events, id))?;
        Ok(&self.events)
    }

    // --- Undo ---

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Restore the collection as it was before the most recent bulk
    /// mutation and persist it. Returns `false` (changing nothing) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> TimetableResult<bool> {
        match self.history.peek() {
            Some(snapshot) => self.store.save(snapshot)?,
            None => return Ok(false),
        }
        if let Some(snapshot) = self.history.pop() {
            self.events = snapshot;
        }
        Ok(true)
    }

    fn apply(&mut self, op: impl FnOnce(Vec<Event>) -> Vec<Event>) -> TimetableResult<()> {
        let next = op(self.events.clone());
        self.store.save(&next)?;
        self.events = next;
        Ok(())
    }

    fn apply_bulk(&mut self, op: impl FnOnce(Vec<Event>) -> Vec<Event>) -> TimetableResult<()> {
        self.history.snapshot(&self.events);
        if let Err(e) = self.apply(op) {
            self.history.pop();
            return Err(e);
        }
        Ok(())
    }
}
