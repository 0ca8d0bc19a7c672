use chrono::Duration as ChronoDuration;

/// Humanised age of the cached schedule, e.g. "3 hours" or "1 minute".
#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const WEEK: i64 = 7 * DAY;

    let secs = td.num_seconds().max(0);
    let (count, unit) = if secs >= WEEK {
        (secs / WEEK, "week")
    } else if secs >= DAY {
        (secs / DAY, "day")
    } else if secs >= HOUR {
        (secs / HOUR, "hour")
    } else if secs >= MINUTE {
        (secs / MINUTE, "minute")
    } else {
        (secs, "second")
    };

    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
