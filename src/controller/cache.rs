use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::fetch::ScheduleSource;
use super::pipeline::build_schedule;
use crate::config::ScheduleConfig;
use crate::error::AppError;
use crate::model::Schedule;

#[derive(Debug, Default)]
struct CacheState {
    schedule: Option<Arc<Schedule>>,
    last_refresh: Option<DateTime<Utc>>,
    consecutive_failures: u32,
    retry_after: Option<DateTime<Utc>>,
}

impl CacheState {
    /// `None` when a refresh is due, otherwise why it is not.
    fn skip_reason(&self, now: DateTime<Utc>, freshness: chrono::Duration) -> Option<RefreshOutcome> {
        if self.retry_after.is_some_and(|retry_after| now < retry_after) {
            return Some(RefreshOutcome::BackingOff);
        }
        match self.last_refresh {
            Some(last) if now - last <= freshness => Some(RefreshOutcome::Fresh),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// The schedule is inside the freshness window, possibly because a
    /// concurrent caller just refreshed it.
    Fresh,
    /// A previous refresh failed and its retry delay has not elapsed; the
    /// last good schedule (if any) is served untouched.
    BackingOff,
    Refreshed { matches: usize },
    /// The previous schedule is still being served.
    Failed(AppError),
}

/// What a reader gets: the last complete schedule (if any) and when it was
/// installed.
#[derive(Debug, Clone, Default)]
pub struct CacheSnapshot {
    pub schedule: Option<Arc<Schedule>>,
    pub last_refresh: Option<DateTime<Utc>>,
}

/// Process-wide schedule store.
///
/// A refresh holds the write lock for the whole fetch → install sequence, so
/// at most one runs at a time and readers wait for it. Readers only clone an
/// `Arc`, so they never see a half-built schedule.
pub struct ScheduleCache {
    source: Arc<dyn ScheduleSource>,
    config: ScheduleConfig,
    state: RwLock<CacheState>,
}

impl ScheduleCache {
    #[must_use]
    pub fn new(source: Arc<dyn ScheduleSource>, config: ScheduleConfig) -> Self {
        Self {
            source,
            config,
            state: RwLock::new(CacheState::default()),
        }
    }

    pub async fn snapshot(&self) -> CacheSnapshot {
        let state = self.state.read().await;
        CacheSnapshot {
            schedule: state.schedule.clone(),
            last_refresh: state.last_refresh,
        }
    }

    /// `None` until the first refresh succeeds.
    pub async fn schedule(&self) -> Option<Arc<Schedule>> {
        self.state.read().await.schedule.clone()
    }

    pub async fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_refresh
    }

    /// Refreshes when the schedule is older than the freshness window (or
    /// missing) and no failure backoff is pending.
    pub async fn refresh_if_stale(&self, now: DateTime<Utc>) -> RefreshOutcome {
        let freshness = self.config.freshness;
        if let Some(skipped) = self.state.read().await.skip_reason(now, freshness) {
            return skipped;
        }

        let mut state = self.state.write().await;
        // another request may have refreshed while we waited for the lock
        if let Some(skipped) = state.skip_reason(now, freshness) {
            debug!(?skipped, "refresh handled by a concurrent request");
            return skipped;
        }

        match self.refresh_locked(&mut state, now).await {
            Ok(matches) => RefreshOutcome::Refreshed { matches },
            Err(e) => RefreshOutcome::Failed(e),
        }
    }

    /// Unconditional refresh, used once at startup.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the fetch or the parse fails; the cache is left
    /// as it was and a retry backoff is armed.
    pub async fn refresh(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut state = self.state.write().await;
        self.refresh_locked(&mut state, now).await
    }

    async fn refresh_locked(
        &self,
        state: &mut CacheState,
        now: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        info!(url = %self.config.source_url, "refreshing schedule");
        let started = Instant::now();

        match self.load().await {
            Ok(schedule) => {
                let elapsed = chrono::Duration::from_std(started.elapsed()).unwrap_or_default();
                let matches = schedule.match_count();
                state.schedule = Some(Arc::new(schedule));
                state.last_refresh = Some(now + elapsed);
                state.consecutive_failures = 0;
                state.retry_after = None;
                info!(matches, elapsed_ms = elapsed.num_milliseconds(), "schedule refreshed");
                Ok(matches)
            }
            Err(e) => {
                state.consecutive_failures = state.consecutive_failures.saturating_add(1);
                let backoff = self.backoff(state.consecutive_failures);
                state.retry_after = Some(now + backoff);
                warn!(
                    error = %e,
                    failures = state.consecutive_failures,
                    retry_in_secs = backoff.num_seconds(),
                    "schedule refresh failed, keeping previous schedule"
                );
                Err(e)
            }
        }
    }

    async fn load(&self) -> Result<Schedule, AppError> {
        let timeout = self.config.fetch_timeout;
        let html = tokio::time::timeout(timeout, self.source.fetch_document())
            .await
            .map_err(|_| AppError::Timeout(timeout))??;
        build_schedule(&html, self.config.days)
    }

    /// Doubles per consecutive failure, never longer than the freshness window.
    fn backoff(&self, failures: u32) -> chrono::Duration {
        let exp = failures.saturating_sub(1).min(16);
        let delay = self.config.retry_backoff * 2_i32.pow(exp);
        delay.min(self.config.freshness)
    }
}
