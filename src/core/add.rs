use crate::models::interval::Interval;
use crate::models::work_log::WorkLog;
use chrono::{NaiveDate, NaiveTime};

/// Manual insertion of a closed interval.
pub struct AddLogic;

impl AddLogic {
    /// Append the interval and re-sort the day by start time.
    /// Returns the 1-based position of the new interval after sorting.
    pub fn apply(log: &mut WorkLog, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> usize {
        let interval = Interval::closed(start, end);

        // The sort is stable: the new interval lands after every earlier start
        // and after any interval starting at the same time.
        let position = log
            .day(&date)
            .map(|day| day.iter().filter(|i| i.start <= start).count())
            .unwrap_or(0);

        log.push(date, interval);
        if let Some(day) = log.day_mut(&date) {
            day.sort_by_key(|i| i.start);
        }

        tracing::info!(%date, %start, %end, position = position + 1, "interval added");
        position + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn add_resorts_the_day() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut log = WorkLog::default();
        log.push(d, Interval::closed(t(13, 0), t(17, 0)));

        let pos = AddLogic::apply(&mut log, d, t(8, 0), t(12, 0));
        assert_eq!(pos, 1);
        let starts: Vec<NaiveTime> = log.day(&d).unwrap().iter().map(|i| i.start).collect();
        assert_eq!(starts, vec![t(8, 0), t(13, 0)]);
    }

    #[test]
    fn add_creates_missing_day() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut log = WorkLog::default();
        assert_eq!(AddLogic::apply(&mut log, d, t(9, 0), t(10, 0)), 1);
        assert_eq!(log.day(&d).unwrap().len(), 1);
    }
}
