//! ICS file generation.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use icalendar::{Calendar, Component, Property};

use crate::calendar::{ShiftCalendar, ShiftEvent};

/// PRODID written into every generated document.
pub const PRODID: &str = "-//shiftcal//EN";

/// Summary line every shift event carries.
pub const EVENT_SUMMARY: &str = "Work shift";

/// Generate .ics content for the whole document.
///
/// Output is deterministic for a given document: the icalendar crate
/// keeps properties ordered, DTSTAMP comes from the stored event rather
/// than the clock, and events appear in insertion order.
pub fn generate_ics(calendar: &ShiftCalendar) -> String {
    let mut cal = Calendar::new();
    for event in calendar.events() {
        cal.push(ics_event(event));
    }
    let cal = cal.done();

    // Post-process to remove unnecessary bloat from the icalendar crate's output
    strip_ics_bloat(&cal.to_string())
}

fn ics_event(event: &ShiftEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(EVENT_SUMMARY);

    // DTSTAMP - required by RFC 5545, always UTC
    let dtstamp = event.stamp.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    add_zoned_property(&mut ics_event, "DTSTART", &event.start, event.tz);
    add_zoned_property(&mut ics_event, "DTEND", &event.end, event.tz);

    ics_event.done()
}

/// Add a local datetime property with the event's TZID parameter.
fn add_zoned_property(
    ics_event: &mut icalendar::Event,
    name: &str,
    datetime: &NaiveDateTime,
    tz: Tz,
) {
    let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", tz.name());
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace the crate's PRODID with our own
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
