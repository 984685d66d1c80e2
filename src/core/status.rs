use crate::core::calculator::week::day_total;
use crate::models::interval::Interval;
use crate::models::tracker_state::TrackerState;
use crate::models::work_log::WorkLog;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct TodayStatus {
    pub date: NaiveDate,
    pub state: TrackerState,
    pub intervals: usize,
    pub running: Option<Interval>,
    pub closed_hours: f64,
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn today(log: &WorkLog, now: NaiveDateTime) -> TodayStatus {
        let date = now.date();
        let day = log.day(&date).unwrap_or(&[]);

        TodayStatus {
            date,
            state: log.state,
            intervals: day.len(),
            running: day.last().filter(|i| i.is_open()).copied(),
            closed_hours: day_total(day),
        }
    }
}
