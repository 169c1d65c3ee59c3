//! ICS serialization for shift calendars.
//!
//! Reading and writing .ics documents according to RFC 5545.

mod generate;
mod parse;

pub use generate::{EVENT_SUMMARY, PRODID, generate_ics};
pub use parse::parse_calendar;
