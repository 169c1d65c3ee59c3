//! Portal credentials come from the environment, optionally seeded
//! from a `.env` file before startup.

use anyhow::{Context, Result};
use shiftcal_provider_workbrain::Credentials;

pub const USERNAME_VAR: &str = "WORKDAY_USERNAME";
pub const PASSWORD_VAR: &str = "WORKDAY_PASSWORD";
pub const TOTP_SECRET_VAR: &str = "WORKDAY_TOTP_SECRET";

pub fn credentials_from_env() -> Result<Credentials> {
    Ok(Credentials {
        username: require(USERNAME_VAR)?,
        password: require(PASSWORD_VAR)?,
        totp_secret: require(TOTP_SECRET_VAR)?,
    })
}

fn require(var: &str) -> Result<String> {
    std::env::var(var).with_context(|| format!("environment variable {} is not set", var))
}
