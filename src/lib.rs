pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod controller {
    pub mod cache;
    pub mod extract;
    pub mod fetch;
    pub mod filter;
    pub mod http_handlers;
    pub mod normalize;
    pub mod pipeline;
}
pub mod view {
    pub mod index;
}

pub use controller::cache::{CacheSnapshot, RefreshOutcome, ScheduleCache};
pub use controller::fetch::{HttpSource, ScheduleSource};
pub use error::AppError;
