use super::types::Args;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) url
pub fn check_http_url(url: &str) -> Result<String, String> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(format!("'{url}' is not an http(s) url."))
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a number between 1 and 7
pub fn check_days(days: &str) -> Result<usize, String> {
    match days.parse::<usize>() {
        Ok(d) if (1..=7).contains(&d) => Ok(d),
        _ => Err(format!("days must be between 1 and 7, got '{days}'.")),
    }
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the cache or timeout settings are zero
    pub fn validate(&self) -> Result<(), String> {
        if self.cache_hours == 0 {
            return Err("cache-hours must be at least 1".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return Err("fetch-timeout-secs must be at least 1".to_string());
        }
        if self.bind.trim().is_empty() {
            return Err("bind address is required".to_string());
        }
        Ok(())
    }
}
