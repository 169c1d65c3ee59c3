//! The shift calendar document.
//!
//! An in-memory .ics document holding one event per scheduled day.
//! Writing the same date twice updates the existing event in place, so
//! a re-scan never duplicates shifts and calendar apps that already
//! imported the file see updates rather than delete-and-recreate.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::error::CalendarResult;
use crate::ics;
use crate::shift::Shift;

/// One shift as stored in the calendar document.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftEvent {
    /// Stable identity; survives schedule changes to the same date.
    pub uid: String,
    /// Zone the wall-clock times below are in.
    pub tz: Tz,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// When this entry was last written (DTSTAMP).
    pub stamp: DateTime<Utc>,
}

impl ShiftEvent {
    /// Calendar date this shift belongs to.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// A shift calendar: ordered events plus the timezone new events are
/// written in.
///
/// Events loaded from an existing file keep the zone the file gave
/// them, so an untouched document re-serializes byte-identically even
/// if the configured zone has changed since it was written.
#[derive(Debug, Clone)]
pub struct ShiftCalendar {
    tz: Tz,
    events: Vec<ShiftEvent>,
}

impl ShiftCalendar {
    /// Empty document writing events in `tz`.
    pub fn new(tz: Tz) -> Self {
        ShiftCalendar {
            tz,
            events: Vec::new(),
        }
    }

    pub(crate) fn with_events(tz: Tz, events: Vec<ShiftEvent>) -> Self {
        ShiftCalendar { tz, events }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn events(&self) -> &[ShiftEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Insert or update the event for `shift.date`.
    ///
    /// An existing event for the date keeps its UID; only its times and
    /// DTSTAMP change, and it is re-zoned to the document timezone. A
    /// new date gets a fresh v4 UID and is appended. At most one event
    /// per calendar date.
    pub fn upsert(&mut self, shift: Shift) {
        let (start, end) = event_span(shift);
        let stamp = Utc::now();
        match self.events.iter_mut().find(|e| e.date() == shift.date) {
            Some(event) => {
                event.tz = self.tz;
                event.start = start;
                event.end = end;
                event.stamp = stamp;
            }
            None => self.events.push(ShiftEvent {
                uid: Uuid::new_v4().to_string(),
                tz: self.tz,
                start,
                end,
                stamp,
            }),
        }
    }

    /// Serialize the document as ICS text.
    pub fn to_ics(&self) -> String {
        ics::generate_ics(self)
    }

    /// Parse ICS text into a document. `tz` becomes the zone for events
    /// written afterwards; parsed events keep their own.
    pub fn from_ics(content: &str, tz: Tz) -> CalendarResult<Self> {
        ics::parse_calendar(content, tz)
    }
}

/// Start/end datetimes for a shift. An end at or before the start rolls
/// over to the next day (closing shifts).
fn event_span(shift: Shift) -> (NaiveDateTime, NaiveDateTime) {
    let start = shift.date.and_time(shift.start);
    let end_date = if shift.is_overnight() {
        shift.date + Days::new(1)
    } else {
        shift.date
    };
    (start, end_date.and_time(shift.end))
}
