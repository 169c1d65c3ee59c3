mod config;
mod sync;

use std::path::PathBuf;

use anyhow::Result;
use chrono_tz::Tz;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shiftcal")]
#[command(version)]
#[command(about = "Pull upcoming work shifts from the staff portal into an .ics calendar")]
struct Cli {
    /// Calendar file to update (created if missing)
    output: PathBuf,

    /// IANA timezone the portal's shift times are in (e.g., "America/Toronto")
    timezone: Tz,

    /// Number of days to scrape, starting today
    #[arg(long, default_value_t = 7)]
    days: u64,
}

fn main() -> Result<()> {
    // Credentials may live in a local .env during development.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let credentials = config::credentials_from_env()?;

    sync::run(&cli.output, cli.timezone, cli.days, &credentials)
}
