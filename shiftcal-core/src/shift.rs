//! A single scheduled work shift.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

/// One work shift as it appears on the portal's day view.
///
/// Times are wall-clock values in the portal's local timezone; zoning
/// happens when the shift is written into a calendar document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Shift {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Shift { date, start, end }
    }

    /// Whether the shift runs past midnight (end at or before start).
    pub fn is_overnight(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.date.format("%Y-%m-%d"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
