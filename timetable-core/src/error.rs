//! Error types for the timetable ecosystem.

use thiserror::Error;

/// Errors that can occur in timetable operations.
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Event duration must be at least {min} minutes (got {got})")]
    InvalidDuration { min: u16, got: i32 },

    #[error("Minute out of range: {0} (expected 0-1439)")]
    InvalidMinute(u16),

    #[error("Event store is corrupt: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for timetable operations.
pub type TimetableResult<T> = Result<T, TimetableError>;
