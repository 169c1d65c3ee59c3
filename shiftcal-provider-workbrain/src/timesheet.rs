//! Day-view timesheet parsing.
//!
//! The portal renders the schedule server-side. The selected day is a
//! `td.currentDay` cell; when a shift is scheduled it contains a
//! `div.calendarTextShiftTime` with the times as `"HH:MM - HH:MM"`.

use chrono::NaiveTime;
use scraper::{Html, Selector};

/// Parse one day view into its three outcomes: a start/end pair, `None`
/// when the day has no shift, or an error when the page does not look
/// like a day view at all (changed markup, or a bounce back to a login
/// page after the session expired).
pub fn parse_day_view(html: &str) -> Result<Option<(NaiveTime, NaiveTime)>, String> {
    let document = Html::parse_document(html);
    let day_cell = Selector::parse("td.currentDay").expect("valid selector");
    let shift_time = Selector::parse("div.calendarTextShiftTime").expect("valid selector");

    let Some(cell) = document.select(&day_cell).next() else {
        return Err("no current-day cell in day view".to_string());
    };

    // A day without that div is a day off, not an error.
    let Some(time_el) = cell.select(&shift_time).next() else {
        return Ok(None);
    };

    let text = time_el.text().collect::<String>();
    parse_time_span(&text).map(Some)
}

/// Parse `"HH:MM - HH:MM"` into a start/end pair.
fn parse_time_span(text: &str) -> Result<(NaiveTime, NaiveTime), String> {
    let mut parts = text.split('-');
    let (Some(start_raw), Some(end_raw), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("unexpected shift time format '{}'", text.trim()));
    };

    Ok((parse_clock(start_raw)?, parse_clock(end_raw)?))
}

fn parse_clock(raw: &str) -> Result<NaiveTime, String> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| format!("unexpected shift time '{raw}'"))
}
