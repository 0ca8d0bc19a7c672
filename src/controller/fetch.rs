use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::AppError;

/// Where the raw schedule page comes from.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// One outbound request, no retries.
    ///
    /// # Errors
    ///
    /// Will return `Err` on transport failure, a non-2xx status or a timeout.
    async fn fetch_document(&self) -> Result<String, AppError>;
}

pub struct HttpSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpSource {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    fn map_err(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout(self.timeout)
        } else {
            AppError::from(e)
        }
    }
}

#[async_trait]
impl ScheduleSource for HttpSource {
    async fn fetch_document(&self) -> Result<String, AppError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_err(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("{} returned {status}", self.url)));
        }

        resp.text().await.map_err(|e| self.map_err(e))
    }
}
