use super::{interval::Interval, tracker_state::TrackerState};
use crate::utils::date::DATE_FORMAT;
use chrono::{Datelike, IsoWeek, NaiveDate};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved key holding the tracker state in the persisted document.
pub const STATE_KEY: &str = "state";

/// The whole work log document.
///
/// On disk it is a single JSON object: one `YYYY-MM-DD` key per day plus the
/// reserved [`STATE_KEY`]. In memory the two concerns are kept apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkLog {
    pub entries: BTreeMap<NaiveDate, Vec<Interval>>,
    pub state: TrackerState,
}

impl WorkLog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn day(&self, date: &NaiveDate) -> Option<&[Interval]> {
        self.entries.get(date).map(Vec::as_slice)
    }

    pub fn day_mut(&mut self, date: &NaiveDate) -> Option<&mut Vec<Interval>> {
        self.entries.get_mut(date)
    }

    /// Append an interval to a day, creating the day if needed.
    pub fn push(&mut self, date: NaiveDate, interval: Interval) {
        self.entries.entry(date).or_default().push(interval);
    }

    /// Days falling into the given ISO week, ascending.
    pub fn days_in_week(&self, week: IsoWeek) -> impl Iterator<Item = (&NaiveDate, &Vec<Interval>)> {
        self.entries.iter().filter(move |(d, _)| d.iso_week() == week)
    }
}

impl Serialize for WorkLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (date, intervals) in &self.entries {
            map.serialize_entry(&date.format(DATE_FORMAT).to_string(), intervals)?;
        }
        map.serialize_entry(STATE_KEY, &self.state)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for WorkLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WorkLogVisitor)
    }
}

struct WorkLogVisitor;

impl<'de> Visitor<'de> for WorkLogVisitor {
    type Value = WorkLog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object keyed by YYYY-MM-DD dates")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<WorkLog, A::Error> {
        let mut log = WorkLog::default();

        while let Some(key) = access.next_key::<String>()? {
            if key == STATE_KEY {
                log.state = access.next_value()?;
                continue;
            }

            let date = NaiveDate::parse_from_str(&key, DATE_FORMAT)
                .map_err(|_| de::Error::custom(format!("invalid date key '{key}'")))?;
            let intervals: Vec<Interval> = access.next_value()?;
            log.entries.insert(date, intervals);
        }

        Ok(log)
    }
}
