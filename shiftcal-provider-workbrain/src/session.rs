//! An authenticated portal session.

use chrono::NaiveDate;
use tracing::debug;

use shiftcal_core::Shift;

use crate::client::PortalHttp;
use crate::config::PortalConfig;
use crate::error::ScrapeError;
use crate::timesheet;

/// A logged-in portal session. Produced by [`crate::Portal::login`];
/// owns the cookie jar that authorizes timesheet requests.
pub struct Session {
    http: PortalHttp,
    config: PortalConfig,
}

impl Session {
    pub(crate) fn new(http: PortalHttp, config: PortalConfig) -> Self {
        Session { http, config }
    }

    /// Read the schedule for one day.
    ///
    /// `Ok(Some(shift))` when a shift is posted, `Ok(None)` when the
    /// day is free, and an error when the response does not look like
    /// a day view (changed markup, expired session, upstream failure).
    pub fn shift_on(&self, date: NaiveDate) -> Result<Option<Shift>, ScrapeError> {
        let url = self.config.day_view_url(date);
        let response = self
            .http
            .get(&url)
            .map_err(|e| ScrapeError::new(date, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::new(date, format!("day view returned {status}")));
        }

        let body = response
            .text()
            .map_err(|e| ScrapeError::new(date, format!("could not read day view: {e}")))?;

        match timesheet::parse_day_view(&body) {
            Ok(Some((start, end))) => {
                debug!(%date, %start, %end, "shift found");
                Ok(Some(Shift::new(date, start, end)))
            }
            Ok(None) => {
                debug!(%date, "no shift");
                Ok(None)
            }
            Err(reason) => Err(ScrapeError::new(date, reason)),
        }
    }
}
