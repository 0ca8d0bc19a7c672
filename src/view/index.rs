use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, html};

use crate::controller::cache::CacheSnapshot;
use crate::model::format_time_ago;

pub const PAGE_TITLE: &str = "Match på TV:n";

#[must_use]
pub fn render_index_template(snapshot: &CacheSnapshot, now: DateTime<Utc>) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
            }
            body {
                p { "Fotboll på TV:n." }
                @match &snapshot.schedule {
                    Some(schedule) => {
                        @if let Some(last) = snapshot.last_refresh {
                            p class="refresh" {
                                "Last refreshed " (format_time_ago(now - last)) " ago."
                            }
                        }
                        @for bucket in schedule.days() {
                            h2 { (bucket.day) }
                            ul {
                                @for m in &bucket.matches {
                                    li { (m) }
                                }
                            }
                        }
                    }
                    None => {
                        p class="unavailable" { "The schedule is not available yet." }
                    }
                }
            }
        }
    }
}
