use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

use super::cache::{RefreshOutcome, ScheduleCache};
use crate::model::Schedule;
use crate::view::index::render_index_template;

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    cache: Data<ScheduleCache>,
) -> impl Responder {
    let now = chrono::Utc::now();
    debug!("incoming request");

    match cache.refresh_if_stale(now).await {
        RefreshOutcome::Failed(e) => debug!(error = %e, "serving cached schedule"),
        RefreshOutcome::Refreshed { matches } => debug!(matches, "refreshed on request"),
        RefreshOutcome::BackingOff => debug!("refresh backing off"),
        RefreshOutcome::Fresh => {}
    }

    let snapshot = cache.snapshot().await;

    let want_json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some(other) => other.parse().unwrap_or(false),
        None => false,
    };

    if want_json {
        let empty = Schedule::default();
        return HttpResponse::Ok().json(json!({
            "available": snapshot.schedule.is_some(),
            "last_refresh": snapshot.last_refresh.map(|t| t.to_rfc3339()),
            "days": snapshot.schedule.as_deref().unwrap_or(&empty),
        }));
    }

    let markup = render_index_template(&snapshot, now);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok()
}
