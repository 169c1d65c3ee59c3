//! One sync pass: log in, scrape the coming days, update the calendar file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use shiftcal_core::{DateWindow, ShiftCalendar};
use shiftcal_provider_workbrain::{Credentials, Portal, PortalConfig};

pub fn run(output: &Path, timezone: Tz, days: u64, credentials: &Credentials) -> Result<()> {
    let mut calendar = load_calendar(output, timezone)?;
    tracing::debug!("loaded {} existing event(s)", calendar.len());

    let portal = Portal::new(PortalConfig::default());
    let session = portal.login(credentials)?;
    println!("Logged in to the portal");

    let today = Utc::now().with_timezone(&timezone).date_naive();
    let mut found = 0;

    for date in DateWindow::new(today, days) {
        match session.shift_on(date)? {
            Some(shift) => {
                println!(
                    "Shift on {}: {} - {}",
                    date,
                    shift.start.format("%H:%M"),
                    shift.end.format("%H:%M")
                );
                calendar.upsert(shift);
                found += 1;
            }
            None => println!("No shift on {}", date),
        }
    }

    fs::write(output, calendar.to_ics())
        .with_context(|| format!("could not write {}", output.display()))?;

    println!(
        "\n{} shift(s) found; {} now holds {} event(s)",
        found,
        output.display(),
        calendar.len()
    );

    Ok(())
}

/// Read the calendar file back in, or start fresh if it does not exist yet.
fn load_calendar(path: &Path, timezone: Tz) -> Result<ShiftCalendar> {
    if !path.exists() {
        return Ok(ShiftCalendar::new(timezone));
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;

    ShiftCalendar::from_ics(&content, timezone)
        .with_context(|| format!("could not parse {}", path.display()))
}
