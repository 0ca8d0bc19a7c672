#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tv_matcher::config::ScheduleConfig;
use tv_matcher::{AppError, ScheduleSource};

pub const FIXTURE: &str = include_str!("../fixtures/tvmatchen.html");

/// In-memory stand-in for the schedule site. Counts every fetch.
pub struct FakeSource {
    response: Mutex<Result<String, AppError>>,
    fetches: AtomicUsize,
    delay: Duration,
}

impl FakeSource {
    pub fn new(body: &str) -> Self {
        Self {
            response: Mutex::new(Ok(body.to_string())),
            fetches: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn failing(err: AppError) -> Self {
        Self {
            response: Mutex::new(Err(err)),
            fetches: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn respond_with(&self, response: Result<String, AppError>) {
        *self.response.lock().expect("fake source lock") = response;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleSource for FakeSource {
    async fn fetch_document(&self) -> Result<String, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response.lock().expect("fake source lock").clone()
    }
}

pub fn test_config() -> ScheduleConfig {
    ScheduleConfig {
        source_url: "http://fixture.invalid/".to_string(),
        ..ScheduleConfig::default()
    }
}

/// A schedule page with `days` headings, each holding one Premier League row
/// and one Serie A row.
pub fn page_with_days(days: usize) -> String {
    let mut html = String::from("<html><body>");
    for d in 0..days {
        html.push_str(&format!(
            r#"<h2 class="day-name"><span class="day-name-inner" id="match-day-day{d}"></span></h2>
            <div>
              <div class="sport-name-fotboll">
                <span class="match-name">Home{d} - Away{d}</span>
                <span class="league">England <a>EN</a> Premier League</span>
                <span class="channel"><span class="channel-item" title="Viaplay"></span></span>
                <span class="time"><span class="field-content">1{d}:00</span></span>
              </div>
              <div class="sport-name-fotboll">
                <span class="match-name">Roma{d} - Lazio{d}</span>
                <span class="league">Italien Serie A</span>
              </div>
            </div>"#
        ));
    }
    html.push_str("</body></html>");
    html
}
