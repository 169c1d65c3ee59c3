//! Portal client for a Workday-fronted Workbrain schedule.
//!
//! [`Portal::login`] walks the three-step login (password, TOTP
//! challenge, SAML relay) and hands back a [`Session`]; the session
//! reads one day of schedule at a time with [`Session::shift_on`].

pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod passcode;
pub mod session;
pub mod timesheet;

pub use auth::{Credentials, Portal};
pub use config::PortalConfig;
pub use error::{AuthError, AuthStage, ScrapeError};
pub use session::Session;
