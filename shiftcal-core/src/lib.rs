//! Core types for shiftcal.
//!
//! The data half of the tool: the `Shift` a portal scraper produces, the
//! `ShiftCalendar` document shifts are written into, and the ICS text
//! format behind it. No I/O happens in this crate.

pub mod calendar;
pub mod date_window;
pub mod error;
pub mod ics;
pub mod shift;

pub use calendar::{ShiftCalendar, ShiftEvent};
pub use date_window::DateWindow;
pub use error::{CalendarFormatError, CalendarResult};
pub use shift::Shift;
