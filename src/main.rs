use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use tracing::{info, warn};

use tv_matcher::args;
use tv_matcher::controller::http_handlers::{health, index};
use tv_matcher::logging::init_logging;
use tv_matcher::{HttpSource, ScheduleCache};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = args::args_checks()?;

    let source = HttpSource::new(
        args.schedule.source_url.clone(),
        args.schedule.fetch_timeout,
    )?;
    let cache = Data::new(ScheduleCache::new(Arc::new(source), args.schedule));

    // populate before accepting requests; a failure here is not fatal, the
    // first request after the backoff tries again
    match cache.refresh(chrono::Utc::now()).await {
        Ok(matches) => info!(matches, "initial schedule loaded"),
        Err(e) => warn!(error = %e, "initial schedule refresh failed, starting empty"),
    }

    info!(bind = %args.bind, "server listening");
    HttpServer::new(move || {
        App::new()
            .app_data(cache.clone())
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health))
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
