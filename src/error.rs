use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("fetch error: {0}")]
    Fetch(String),
    #[error("fetch timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        Self::Fetch(e.to_string())
    }
}

impl From<scraper::error::SelectorErrorKind<'_>> for AppError {
    fn from(e: scraper::error::SelectorErrorKind<'_>) -> Self {
        Self::Parse(format!("invalid selector: {e}"))
    }
}
