use crate::utils::time::{clock12, clock12_opt, hours_between};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One work session of a day.
///
/// `end` is `None` while the session is still running. Only the last
/// interval of a day is expected to be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(with = "clock12")]
    pub start: NaiveTime, // ⇔ "start": "HH:MM:SS AM"
    #[serde(with = "clock12_opt")]
    pub end: Option<NaiveTime>, // ⇔ "end": "HH:MM:SS PM" | null
}

impl Interval {
    pub fn open(start: NaiveTime) -> Self {
        Self { start, end: None }
    }

    pub fn closed(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Elapsed hours, or `None` while the interval is open.
    pub fn hours(&self) -> Option<f64> {
        self.end.map(|end| hours_between(self.start, end))
    }
}
