pub mod match_entry;
pub mod schedule;
pub mod utils;

pub use match_entry::Match;
pub use schedule::{DayBucket, Schedule};
pub use utils::format_time_ago;
