//! Core types and logic for the timetable ecosystem.
//!
//! This crate provides everything below the presentation layer:
//! - `Event` and the fixed color palette
//! - `engine`: pure event-set transformations (toggle-copy, group edits)
//! - `store`: the single-blob JSON persistence boundary
//! - `Session`: the stateful shell that owns the collection, the store,
//!   and the undo history
//!
//! The engine functions are collection-in, collection-out; nothing in
//! `engine` touches storage, so every transformation is testable as a
//! plain function.

pub mod engine;
pub mod error;
pub mod event;
pub mod history;
pub mod session;
pub mod stats;
pub mod store;
pub mod time;

pub use error::{TimetableError, TimetableResult};
pub use event::{Event, COLOR_PALETTE, MIN_DURATION_MIN};
pub use session::Session;
pub use store::{EventStore, JsonFileStore, MemoryStore};
