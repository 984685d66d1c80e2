use crate::errors::{AppError, AppResult};
use crate::models::interval::Interval;
use crate::models::work_log::WorkLog;
use crate::utils::date::format_date;
use chrono::{NaiveDate, NaiveTime};

pub struct EditLogic;

impl EditLogic {
    /// Replace the start and/or end of interval `index` (1-based) of `date`.
    /// Returns the updated interval.
    pub fn apply(
        log: &mut WorkLog,
        date: NaiveDate,
        index: usize,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> AppResult<Interval> {
        if start.is_none() && end.is_none() {
            return Err(AppError::Other(
                "Nothing to edit: provide --start and/or --end.".into(),
            ));
        }

        let date_str = format_date(&date);
        let day = log
            .day_mut(&date)
            .ok_or_else(|| AppError::NoEntriesForDate(date_str.clone()))?;

        let interval = index
            .checked_sub(1)
            .and_then(|i| day.get_mut(i))
            .ok_or(AppError::InvalidIndex {
                date: date_str,
                index,
            })?;

        if let Some(s) = start {
            interval.start = s;
        }
        if let Some(e) = end {
            interval.end = Some(e);
        }

        tracing::info!(%date, index, ?interval, "interval edited");
        Ok(*interval)
    }
}
