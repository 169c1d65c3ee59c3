//! Consecutive-day windows for schedule scans.

use chrono::{Days, NaiveDate};

/// Iterator over `len` consecutive days starting at `start`.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    next: NaiveDate,
    remaining: u64,
}

impl DateWindow {
    pub fn new(start: NaiveDate, len: u64) -> Self {
        DateWindow {
            next: start,
            remaining: len,
        }
    }
}

impl Iterator for DateWindow {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.next;
        self.next = date + Days::new(1);
        self.remaining -= 1;
        Some(date)
    }
}
