//! Error types for calendar document handling.

use thiserror::Error;

/// Errors raised when reading an existing .ics document.
///
/// Parsing is strict: a malformed document is reported, never silently
/// skipped over, so a hand-edited or truncated file cannot lose events
/// on the next write.
#[derive(Error, Debug)]
pub enum CalendarFormatError {
    #[error("Not an iCalendar document: {0}")]
    NotACalendar(String),

    #[error("Event is missing required property {0}")]
    MissingProperty(&'static str),

    #[error("Invalid {property} value '{value}'")]
    InvalidProperty {
        property: &'static str,
        value: String,
    },

    #[error("{0} has no TZID parameter")]
    MissingTimezone(&'static str),

    #[error("Unknown timezone identifier '{0}'")]
    UnknownTimezone(String),
}

/// Result type alias for calendar document operations.
pub type CalendarResult<T> = Result<T, CalendarFormatError>;
