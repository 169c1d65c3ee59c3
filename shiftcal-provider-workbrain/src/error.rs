//! Error types for portal authentication and scraping.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// The login step at which authentication failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStage {
    Password,
    Mfa,
    Sso,
}

impl fmt::Display for AuthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthStage::Password => "password",
            AuthStage::Mfa => "mfa",
            AuthStage::Sso => "sso",
        };
        f.write_str(name)
    }
}

/// Login failure, tagged with the step it happened at.
///
/// Nothing retries automatically; the caller decides whether another
/// login attempt is worth it.
#[derive(Error, Debug)]
#[error("Authentication failed at {stage} step: {reason}")]
pub struct AuthError {
    pub stage: AuthStage,
    pub reason: String,
}

impl AuthError {
    pub fn new(stage: AuthStage, reason: impl Into<String>) -> Self {
        AuthError {
            stage,
            reason: reason.into(),
        }
    }
}

/// Failure to read the schedule for one day.
///
/// Distinct from the "no shift scheduled" outcome, which is not an
/// error.
#[derive(Error, Debug)]
#[error("Could not read schedule for {date}: {reason}")]
pub struct ScrapeError {
    pub date: NaiveDate,
    pub reason: String,
}

impl ScrapeError {
    pub fn new(date: NaiveDate, reason: impl Into<String>) -> Self {
        ScrapeError {
            date,
            reason: reason.into(),
        }
    }
}
