use std::time::Duration;

pub const SOURCE_URL: &str = "http://www.tvmatchen.nu/";
pub const DAYS_TO_SHOW: usize = 3;
pub const CACHE_HOURS: u32 = 10;
pub const CACHE_DURATION: chrono::Duration = chrono::Duration::hours(CACHE_HOURS as i64);
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
/// First delay after a failed refresh; doubles per consecutive failure.
pub const RETRY_BACKOFF: chrono::Duration = chrono::Duration::minutes(1);

/// The interest set. Matched as case-sensitive substrings of the league label.
pub const LEAGUES: &[&str] = &["Premier League", "Ligue 1", "Championship", "Allsvenskan"];

#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub source_url: String,
    pub days: usize,
    pub freshness: chrono::Duration,
    pub fetch_timeout: Duration,
    pub retry_backoff: chrono::Duration,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            days: DAYS_TO_SHOW,
            freshness: CACHE_DURATION,
            fetch_timeout: FETCH_TIMEOUT,
            retry_backoff: RETRY_BACKOFF,
        }
    }
}
