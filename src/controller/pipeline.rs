use scraper::Html;
use tracing::trace;

use super::extract::extract;
use super::filter::is_interesting;
use super::normalize::{clean_field, normalize_league};
use crate::config::LEAGUES;
use crate::error::AppError;
use crate::model::{Match, Schedule};

/// Extract, normalize and filter one schedule page.
///
/// # Errors
///
/// Will return `Err` if the page does not look like a schedule page
pub fn build_schedule(html: &str, max_days: usize) -> Result<Schedule, AppError> {
    if html.trim().is_empty() {
        return Err(AppError::Parse("empty document".to_string()));
    }

    let doc = Html::parse_document(html);
    let raw_days = extract(&doc, max_days)?;

    let mut schedule = Schedule::with_capacity(raw_days.len());
    for raw_day in raw_days {
        let matches = schedule.start_day(&raw_day.day);
        for row in raw_day.rows {
            let league = normalize_league(&row.league, &row.league_links);
            if !is_interesting(&league, LEAGUES) {
                trace!(day = %raw_day.day, %league, "skipping league");
                continue;
            }
            matches.push(Match {
                name: clean_field(&row.name),
                league,
                channel: clean_field(&row.channel),
                time: clean_field(&row.time),
            });
        }
    }

    Ok(schedule)
}
