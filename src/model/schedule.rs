use serde::{Serialize, Serializer};

use super::Match;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBucket {
    pub day: String,
    pub matches: Vec<Match>,
}

/// Day identifier → matches, both in source document order.
///
/// Serializes as a JSON object keyed by day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    days: Vec<DayBucket>,
}

impl Schedule {
    #[must_use]
    pub fn with_capacity(days: usize) -> Self {
        Self {
            days: Vec::with_capacity(days),
        }
    }

    /// Starts a fresh bucket for `day` and returns it. A repeated identifier
    /// resets the existing bucket in place rather than adding a second key.
    pub fn start_day(&mut self, day: &str) -> &mut Vec<Match> {
        let idx = match self.days.iter().position(|b| b.day == day) {
            Some(idx) => {
                self.days[idx].matches.clear();
                idx
            }
            None => {
                self.days.push(DayBucket {
                    day: day.to_string(),
                    matches: Vec::new(),
                });
                self.days.len() - 1
            }
        };
        &mut self.days[idx].matches
    }

    #[must_use]
    pub fn get(&self, day: &str) -> Option<&[Match]> {
        self.days
            .iter()
            .find(|b| b.day == day)
            .map(|b| b.matches.as_slice())
    }

    pub fn days(&self) -> impl Iterator<Item = &DayBucket> {
        self.days.iter()
    }

    /// Number of day buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.days.iter().map(|b| b.matches.len()).sum()
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.days.iter().map(|b| (&b.day, &b.matches)))
    }
}
