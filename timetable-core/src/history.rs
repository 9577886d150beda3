//! Undo history: full-collection snapshots, LIFO.

use crate::event::Event;

/// Snapshot stack for undo.
///
/// Each entry is a deep copy of the whole collection, pushed immediately
/// before a bulk mutation. The stack lives for the process only; it is
/// never persisted, and it has no upper bound.
#[derive(Debug, Default)]
pub struct History {
    stack: Vec<Vec<Event>>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Push a copy of the collection as it is *before* a mutation.
    pub fn snapshot(&mut self, events: &[Event]) {
        self.stack.push(events.to_vec());
    }

    /// Pop the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<Vec<Event>> {
        self.stack.pop()
    }

    /// The most recent snapshot without removing it.
    pub fn peek(&self) -> Option<&[Event]> {
        self.stack.last().map(Vec::as_slice)
    }

    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
