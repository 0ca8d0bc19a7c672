use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::config::ScheduleConfig;

/// # Errors
///
/// Will return `Err` if the arguments are inconsistent
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let schedule = ScheduleConfig {
            source_url: args.source_url,
            days: args.days,
            freshness: chrono::Duration::hours(i64::from(args.cache_hours)),
            fetch_timeout: std::time::Duration::from_secs(args.fetch_timeout_secs),
            ..ScheduleConfig::default()
        };
        CleanArgs {
            bind: args.bind,
            schedule,
        }
    }
}
