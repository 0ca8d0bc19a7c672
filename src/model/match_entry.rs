use serde::Serialize;
use std::fmt;

/// One televised football match.
///
/// `time` is kept exactly as the source displays it; nothing sorts or
/// compares on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub name: String,
    pub league: String,
    pub channel: String,
    pub time: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.time, self.name, self.league, self.channel
        )
    }
}
