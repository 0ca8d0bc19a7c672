use clap::Parser;

use crate::config::{CACHE_HOURS, DAYS_TO_SHOW, FETCH_TIMEOUT, SOURCE_URL};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the web server listens on.
    #[arg(short = 'b', long, value_name = "ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// Page the schedule is scraped from.
    #[arg(
        long,
        value_name = "URL",
        default_value = SOURCE_URL,
        value_parser = crate::args::validation::check_http_url
    )]
    pub source_url: String,

    /// Number of days to show.
    #[arg(
        short = 'd',
        long,
        value_name = "DAYS",
        default_value_t = DAYS_TO_SHOW,
        value_parser = crate::args::validation::check_days
    )]
    pub days: usize,

    /// How long a scraped schedule is served before it is fetched again.
    #[arg(long, value_name = "HOURS", default_value_t = CACHE_HOURS)]
    pub cache_hours: u32,

    #[arg(long, value_name = "SECONDS", default_value_t = FETCH_TIMEOUT.as_secs())]
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub schedule: crate::config::ScheduleConfig,
}
