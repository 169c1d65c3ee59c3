//! ICS file parsing using the icalendar crate's parser.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::calendar::{ShiftCalendar, ShiftEvent};
use crate::error::{CalendarFormatError, CalendarResult};

/// Parse ICS content into a calendar document.
///
/// Strict: every VEVENT must carry UID, DTSTAMP, DTSTART and DTEND, and
/// start/end must be local datetimes whose TZID names a real zone. A
/// violation is an error, never a silently dropped event.
///
/// `tz` becomes the document timezone for events written later; events
/// read here keep the zone the file gave them.
pub fn parse_calendar(content: &str, tz: Tz) -> CalendarResult<ShiftCalendar> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| CalendarFormatError::NotACalendar(e.to_string()))?;

    let mut events = Vec::new();
    for component in &calendar.components {
        if component.name == "VEVENT" {
            events.push(parse_vevent(component)?);
        }
    }

    Ok(ShiftCalendar::with_events(tz, events))
}

fn parse_vevent(vevent: &Component) -> CalendarResult<ShiftEvent> {
    let uid = vevent
        .find_prop("UID")
        .ok_or(CalendarFormatError::MissingProperty("UID"))?
        .val
        .to_string();

    let stamp = utc_stamp(vevent)?;
    let (start, tz) = zoned_datetime(vevent, "DTSTART")?;
    let (end, _) = zoned_datetime(vevent, "DTEND")?;

    Ok(ShiftEvent {
        uid,
        tz,
        start,
        end,
        stamp,
    })
}

/// Read a local datetime property and resolve its TZID parameter.
fn zoned_datetime(vevent: &Component, name: &'static str) -> CalendarResult<(NaiveDateTime, Tz)> {
    let prop = vevent
        .find_prop(name)
        .ok_or(CalendarFormatError::MissingProperty(name))?;
    let value = prop.val.to_string();

    let parsed =
        DatePerhapsTime::try_from(prop).map_err(|_| CalendarFormatError::InvalidProperty {
            property: name,
            value: value.clone(),
        })?;

    match parsed {
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
            let tz = tzid
                .parse::<Tz>()
                .map_err(|_| CalendarFormatError::UnknownTimezone(tzid))?;
            Ok((date_time, tz))
        }
        _ => Err(CalendarFormatError::MissingTimezone(name)),
    }
}

/// Read DTSTAMP, which is always a UTC datetime with a Z suffix.
fn utc_stamp(vevent: &Component) -> CalendarResult<DateTime<Utc>> {
    let prop = vevent
        .find_prop("DTSTAMP")
        .ok_or(CalendarFormatError::MissingProperty("DTSTAMP"))?;
    let raw = prop.val.as_ref();

    raw.strip_suffix('Z')
        .and_then(|s| NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S").ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CalendarFormatError::InvalidProperty {
            property: "DTSTAMP",
            value: raw.to_string(),
        })
}
